use elpris_core::price::entity::{HOURS_IN_DAY, PriceSeries};
use elpris_core::price::error::PriceError;
use elpris_core::price::input::{InputOutcome, collect_prices};
use std::io::Cursor;

fn lines(values: &[&str]) -> Cursor<Vec<u8>> {
    let mut text = values.join("\n");
    text.push('\n');
    Cursor::new(text.into_bytes())
}

#[test]
fn test_collects_full_day() -> anyhow::Result<()> {
    let input: Vec<String> = (0..HOURS_IN_DAY).map(|h| format!(" {} ", h * 10)).collect();
    let refs: Vec<&str> = input.iter().map(String::as_str).collect();
    let mut reader = lines(&refs);
    let mut prompts = Vec::new();
    let mut series = PriceSeries::new();

    let outcome = collect_prices(&mut reader, &mut prompts, &mut series)?;

    assert_eq!(outcome, InputOutcome::Complete);
    assert_eq!(series.get(0), Some(0));
    assert_eq!(series.get(23), Some(230));

    let prompts = String::from_utf8(prompts)?;
    assert!(prompts.starts_with("Ange elpriser för varje timme på dygnet (i öre per kWh):\n"));
    assert!(prompts.contains("Pris för timme 00-01:\n"));
    assert!(prompts.contains("Pris för timme 23-00:\n"));
    Ok(())
}

#[test]
fn test_early_end_keeps_remaining_hours() -> anyhow::Result<()> {
    let mut series = PriceSeries::from([99; HOURS_IN_DAY]);
    let mut reader = lines(&["1", "-2", "+3"]);
    let mut prompts = Vec::new();

    let outcome = collect_prices(&mut reader, &mut prompts, &mut series)?;

    assert_eq!(outcome, InputOutcome::Exhausted { filled: 3 });
    assert_eq!(&series.prices()[..4], &[1, -2, 3, 99]);
    assert_eq!(series.get(23), Some(99));
    Ok(())
}

#[test]
fn test_invalid_number_aborts_and_preserves_prefix() {
    let mut series = PriceSeries::new();
    let mut reader = lines(&["12", "13", "abc", "15"]);
    let mut prompts = Vec::new();

    let err = collect_prices(&mut reader, &mut prompts, &mut series).unwrap_err();

    match err {
        PriceError::InvalidNumber { hour, input } => {
            assert_eq!(hour, 2);
            assert_eq!(input, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(&series.prices()[..4], &[12, 13, 0, 0]);
}

#[test]
fn test_empty_input_fills_nothing() -> anyhow::Result<()> {
    let mut series = PriceSeries::new();
    let mut reader = Cursor::new(Vec::new());
    let mut prompts = Vec::new();

    let outcome = collect_prices(&mut reader, &mut prompts, &mut series)?;

    assert_eq!(outcome, InputOutcome::Exhausted { filled: 0 });
    assert_eq!(series, PriceSeries::new());
    Ok(())
}

#[test]
fn test_non_utf8_line_is_an_invalid_number() {
    let mut series = PriceSeries::new();
    let mut reader = Cursor::new(b"5\n\xfe\n7\n".to_vec());
    let mut prompts = Vec::new();

    let err = collect_prices(&mut reader, &mut prompts, &mut series).unwrap_err();

    match err {
        PriceError::InvalidNumber { hour, input } => {
            assert_eq!(hour, 1);
            assert_eq!(input, "\u{fffd}");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(&series.prices()[..3], &[5, 0, 0]);
}
