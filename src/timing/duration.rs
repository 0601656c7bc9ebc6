use crate::config::params::GlobalParams;
use crate::timeline::erase::EraseStrategy;
use crate::timeline::line::Line;

/// Substitute for rates that slipped past boundary validation.
pub const MIN_RATE: f64 = 1.0;

/// Time to type or erase `chars` characters at `rate` characters per second, in ms.
///
/// Non-positive or non-finite rates are treated as [`MIN_RATE`].
pub fn duration_ms(chars: usize, rate: f64) -> f64 {
    let rate = if rate.is_finite() && rate > 0.0 {
        rate
    } else {
        MIN_RATE
    };
    chars as f64 * (1000.0 / rate)
}

/// Typing duration of `line`.
pub fn print_duration_ms(line: &Line, params: &GlobalParams) -> f64 {
    duration_ms(line.char_count, params.print_rate)
}

/// Erasing duration of `line`; zero when the strategy never erases.
pub fn erase_duration_ms(line: &Line, params: &GlobalParams) -> f64 {
    match params.erase_strategy {
        EraseStrategy::None => 0.0,
        EraseStrategy::Line | EraseStrategy::Fade => duration_ms(line.char_count, params.erase_rate),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timing/duration.rs"]
mod tests;
