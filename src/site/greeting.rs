use chrono::{Local, Timelike};

/// Greeting for an hour of the day (0-23).
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good Morning!",
        12..=16 => "Good Afternoon!",
        17..=20 => "Good Evening!",
        _ => "Good Night!",
    }
}

/// Greeting for the current local time.
pub fn current_greeting() -> &'static str {
    greeting_for_hour(Local::now().hour())
}
