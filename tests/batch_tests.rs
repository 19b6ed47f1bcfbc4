use premium_lib::batch::{load_inputs, price_batch, read_inputs, write_results, BatchRow};
use premium_lib::{BatchInput, BlackScholes};

/// Valid rows price, invalid rows carry an error, order is preserved.
#[test]
fn test_batch_file_mixed_rows() {
    let inputs = load_inputs("tests/data/batch_requests.csv").expect("Failed to load batch");
    assert_eq!(inputs.len(), 5);

    let rows = price_batch(&BlackScholes, &inputs);
    assert_eq!(rows.len(), 5);

    assert!((rows[0].premium.unwrap() - 10.450_583_572_2).abs() < 1e-8);
    assert!((rows[1].premium.unwrap() - 5.573_526_022_3).abs() < 1e-8);
    assert!(rows[2].error.as_deref().unwrap().contains("`spot`"));
    assert!(rows[3].error.as_deref().unwrap().contains("`time_to_expiry`"));
    // padded fields and mixed-case option type
    assert!((rows[4].premium.unwrap() - 4.759_422_392_9).abs() < 1e-8);

    for row in &rows {
        assert!(row.premium.is_some() != row.error.is_some());
    }
}

#[test]
fn test_results_csv_layout() {
    let inputs = load_inputs("tests/data/batch_requests.csv").unwrap();
    let rows = price_batch(&BlackScholes, &inputs);

    let mut out = Vec::new();
    write_results(&mut out, &rows).unwrap();
    let text = String::from_utf8(out).unwrap();

    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "option_type,spot,volatility,strike,risk_free_rate,time_to_expiry,premium,error"
    );
    assert_eq!(text.lines().count(), 6);

    // results read back with the same shape
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let back: Vec<BatchRow> = reader.deserialize().collect::<Result<_, _>>().unwrap();
    assert_eq!(back.len(), rows.len());
    assert_eq!(back[2].premium, None);
    assert!(back[2].error.is_some());
}

#[test]
fn test_input_from_request() {
    let request = premium_lib::PricingRequest::new(
        premium_lib::MarketModel::new(42.0, 0.2).unwrap(),
        40.0,
        0.1,
        0.5,
        premium_lib::OptionType::Put,
    )
    .unwrap();
    let input = BatchInput::from(&request);
    assert_eq!(input.option_type, "put");
    assert_eq!(input.to_request().unwrap(), request);
}

#[test]
fn test_missing_column_is_read_error() {
    let data = "option_type,spot,volatility,strike\ncall,100,0.2,100\n";
    assert!(read_inputs(data.as_bytes()).is_err());
}

#[test]
fn test_missing_file_is_error() {
    let err = load_inputs("tests/data/nope.csv").unwrap_err();
    assert!(err.to_string().contains("nope.csv"));
}
