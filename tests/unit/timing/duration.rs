use super::*;
use crate::metrics::oracle::ApproxWidth;

fn line(text: &str) -> Line {
    Line::measure(text, 0, &ApproxWidth, GlobalParams::default().geometry.text_style())
}

#[test]
fn duration_is_chars_times_period() {
    assert_eq!(duration_ms(2, 2.0), 1000.0);
    assert_eq!(duration_ms(10, 20.0), 500.0);
    assert_eq!(duration_ms(0, 5.0), 0.0);
}

#[test]
fn invalid_rates_use_minimum_rate() {
    assert_eq!(duration_ms(3, 0.0), 3000.0);
    assert_eq!(duration_ms(3, -4.0), 3000.0);
    assert_eq!(duration_ms(3, f64::NAN), 3000.0);
    assert_eq!(duration_ms(1, 0.5), 2000.0);
}

#[test]
fn print_and_erase_use_their_own_rates() {
    let params = GlobalParams {
        print_rate: 4.0,
        erase_rate: 8.0,
        ..GlobalParams::default()
    };
    let l = line("abcd");
    assert_eq!(print_duration_ms(&l, &params), 1000.0);
    assert_eq!(erase_duration_ms(&l, &params), 500.0);
}

#[test]
fn none_strategy_never_erases() {
    let params = GlobalParams {
        erase_strategy: EraseStrategy::None,
        ..GlobalParams::default()
    };
    assert_eq!(erase_duration_ms(&line("abcd"), &params), 0.0);
}
