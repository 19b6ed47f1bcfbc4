
use premium_lib::{greeks, price, BlackScholes, OptionType, PricingModel, PricingRequest};
use test_utils::{atm_request, request};

fn bumped(req: &PricingRequest, f: impl Fn(&mut PricingRequest)) -> f64 {
    let mut r = *req;
    f(&mut r);
    price(&r).unwrap()
}

fn contracts() -> Vec<PricingRequest> {
    let mut out = Vec::new();
    for option_type in [OptionType::Call, OptionType::Put] {
        out.push(request(option_type, 100.0, 0.2, 100.0, 0.05, 1.0));
        out.push(request(option_type, 42.0, 0.2, 40.0, 0.1, 0.5));
        out.push(request(option_type, 90.0, 0.35, 110.0, -0.005, 2.0));
        out.push(request(option_type, 250.0, 0.6, 180.0, 0.03, 0.1));
    }
    out
}

/// Closed-form Greeks agree with central finite differences of the premium.
#[test]
fn test_greeks_match_finite_differences() {
    for req in contracts() {
        let g = greeks(&req).unwrap();
        let label = format!("{:?}", req);

        let h = 1e-3 * req.model.spot;
        let up = bumped(&req, |r| r.model.spot += h);
        let down = bumped(&req, |r| r.model.spot -= h);
        let mid = price(&req).unwrap();
        let fd_delta = (up - down) / (2.0 * h);
        let fd_gamma = (up - 2.0 * mid + down) / (h * h);
        assert!((g.delta - fd_delta).abs() < 1e-5, "delta {}", label);
        assert!((g.gamma - fd_gamma).abs() < 1e-4, "gamma {}", label);

        let hv = 1e-5;
        let fd_vega = (bumped(&req, |r| r.model.volatility += hv)
            - bumped(&req, |r| r.model.volatility -= hv))
            / (2.0 * hv);
        assert!((g.vega - fd_vega).abs() < 1e-4 * g.vega.max(1.0), "vega {}", label);

        let ht = 1e-5;
        let fd_theta = -(bumped(&req, |r| r.time_to_expiry += ht)
            - bumped(&req, |r| r.time_to_expiry -= ht))
            / (2.0 * ht);
        assert!((g.theta - fd_theta).abs() < 1e-4 * g.theta.abs().max(1.0), "theta {}", label);

        let hr = 1e-5;
        let fd_rho = (bumped(&req, |r| r.risk_free_rate += hr)
            - bumped(&req, |r| r.risk_free_rate -= hr))
            / (2.0 * hr);
        assert!((g.rho - fd_rho).abs() < 1e-4 * g.rho.abs().max(1.0), "rho {}", label);
    }
}

#[test]
fn test_call_put_greek_relations() {
    let call = greeks(&atm_request(OptionType::Call)).unwrap();
    let put = greeks(&atm_request(OptionType::Put)).unwrap();

    assert!((call.delta - put.delta - 1.0).abs() < 1e-12);
    assert_eq!(call.gamma, put.gamma);
    assert_eq!(call.vega, put.vega);
    assert!(call.delta > 0.0 && call.delta < 1.0);
    assert!(put.delta < 0.0 && put.delta > -1.0);
    assert!(call.rho > 0.0 && put.rho < 0.0);
}

#[test]
fn test_trait_greeks_match_free_function() {
    let req = atm_request(OptionType::Put);
    assert_eq!(BlackScholes.greeks(&req).unwrap(), greeks(&req).unwrap());
}

#[test]
fn test_greeks_reject_invalid_input() {
    let mut req = atm_request(OptionType::Call);
    req.strike = 0.0;
    assert_eq!(greeks(&req).unwrap_err().field(), "strike");
}
