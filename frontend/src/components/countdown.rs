use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Splits a signed remaining duration into display units, clamped at
    /// zero once the target has passed.
    pub fn from_seconds(remaining: i64) -> Self {
        let remaining = remaining.max(0);
        Self {
            days: remaining / 86_400,
            hours: (remaining / 3_600) % 24,
            minutes: (remaining / 60) % 60,
            seconds: remaining % 60,
        }
    }
}

pub fn pad(value: i64) -> String {
    format!("{:02}", value)
}

const UNIT_LABELS: [&str; 4] = ["Days", "Hours", "Min", "Sec"];

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    /// RFC 3339 launch instant, e.g. "2026-03-31T09:00:00-04:00".
    pub target_date: String,
}

#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownProps) -> Html {
    let time_left = use_state(|| None::<TimeLeft>);

    {
        let time_left = time_left.clone();
        let target_date = props.target_date.clone();
        use_effect_with_deps(
            move |_| {
                let target = DateTime::parse_from_rfc3339(&target_date)
                    .map(|t| t.with_timezone(&Utc))
                    .ok();
                let tick = move || {
                    if let Some(target) = target {
                        let remaining = (target - Utc::now()).num_seconds();
                        time_left.set(Some(TimeLeft::from_seconds(remaining)));
                    }
                };
                tick();
                let interval = Interval::new(1_000, tick);
                move || drop(interval)
            },
            (),
        );
    }

    // "--" placeholders until the first tick
    let values: [String; 4] = match *time_left {
        Some(tl) => [pad(tl.days), pad(tl.hours), pad(tl.minutes), pad(tl.seconds)],
        None => ["--".to_string(), "--".to_string(), "--".to_string(), "--".to_string()],
    };

    html! {
        <div class="countdown">
            {
                UNIT_LABELS.iter().zip(values.iter()).map(|(label, value)| html! {
                    <div class="countdown-unit" key={*label}>
                        <div class="countdown-value">{value.as_str()}</div>
                        <span class="countdown-label">{*label}</span>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn past_target_clamps_to_zero() {
        let tl = TimeLeft::from_seconds(-42);
        assert_eq!((tl.days, tl.hours, tl.minutes, tl.seconds), (0, 0, 0, 0));
    }

    #[test]
    fn splits_into_floored_units() {
        // 2 days, 3 hours, 4 minutes, 5 seconds
        let tl = TimeLeft::from_seconds(2 * 86_400 + 3 * 3_600 + 4 * 60 + 5);
        assert_eq!((tl.days, tl.hours, tl.minutes, tl.seconds), (2, 3, 4, 5));
    }

    #[test]
    fn units_stay_in_range() {
        for remaining in [0, 59, 60, 3_599, 3_600, 86_399, 86_400, 10_000_000] {
            let tl = TimeLeft::from_seconds(remaining);
            assert!(tl.hours < 24 && tl.minutes < 60 && tl.seconds < 60);
            assert!(tl.days >= 0);
        }
    }

    #[test]
    fn pads_to_two_digits() {
        assert_eq!(pad(0), "00");
        assert_eq!(pad(7), "07");
        assert_eq!(pad(59), "59");
        assert_eq!(pad(123), "123");
    }
}
