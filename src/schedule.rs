//! Schedule construction: turning a shipment snapshot into day buckets.
//!
//! Pure and synchronous. The same inputs always produce the same buckets,
//! so callers may rebuild on every render or navigation step.

use jiff::Zoned;
use jiff::civil::Date;

use crate::model::{DayBucket, Shipment, WindowSpec};

/// Build the buckets for `window` as seen at `now`.
///
/// Shipments that arrived at or before `now` are dropped. The rest are
/// ordered by arrival (input order on ties) and placed on the calendar
/// date of their arrival in `now`'s time zone. Every date of the window
/// gets a bucket, even when nothing arrives that day; shipments arriving
/// outside the window appear nowhere.
pub fn build_schedule(shipments: &[Shipment], window: WindowSpec, now: &Zoned) -> Vec<DayBucket> {
    let cutoff = now.timestamp();
    let tz = now.time_zone();

    let mut upcoming: Vec<&Shipment> = shipments
        .iter()
        .filter(|s| s.estimated_arrival > cutoff)
        .collect();
    // Stable, so equal arrivals keep their input order.
    upcoming.sort_by_key(|s| s.estimated_arrival);

    let dates = window.dates(now.date());
    let mut buckets: Vec<DayBucket> = dates
        .iter()
        .map(|&date| DayBucket {
            date,
            label: label(date),
            shipments: Vec::new(),
        })
        .collect();

    let Some(&start) = dates.first() else {
        return buckets;
    };

    let mut placed = 0usize;
    for shipment in upcoming {
        let arrival = tz.to_datetime(shipment.estimated_arrival).date();
        if let Some(bucket) = day_offset(start, arrival).and_then(|i| buckets.get_mut(i)) {
            bucket.shipments.push(shipment.clone());
            placed += 1;
        }
    }

    tracing::trace!(
        total = shipments.len(),
        placed,
        days = buckets.len(),
        %start,
        "built schedule"
    );

    buckets
}

/// Display label for a bucket date, e.g. `Monday 2026-10-19`.
pub fn label(date: Date) -> String {
    date.strftime("%A %Y-%m-%d").to_string()
}

/// Whole days from `start` to `date`, if `date` is not before `start`.
fn day_offset(start: Date, date: Date) -> Option<usize> {
    let days = start.until(date).ok()?.get_days();
    usize::try_from(days).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::num::NonZeroU32;

    use jiff::civil::date;
    use jiff::tz::{self, TimeZone};
    use jiff::{Timestamp, ToSpan};

    use crate::navigation::{NavAction, Navigator};

    fn now() -> Zoned {
        "2026-10-19T12:00:00Z"
            .parse::<Timestamp>()
            .unwrap()
            .to_zoned(TimeZone::UTC)
    }

    /// A timestamp `hours` away from `now()`.
    fn at(hours: i64) -> Timestamp {
        now().timestamp() + hours.hours()
    }

    fn shipment(id: &str, arrival: Timestamp) -> Shipment {
        Shipment {
            house_bill_number: id.to_string(),
            client: "Acme".to_string(),
            origin: "Rotterdam".to_string(),
            destination: "Singapore".to_string(),
            mode: "Sea".to_string(),
            estimated_departure: arrival - 240.hours(),
            estimated_arrival: arrival,
            status: "In transit".to_string(),
        }
    }

    fn ids(bucket: &DayBucket) -> Vec<&str> {
        bucket
            .shipments
            .iter()
            .map(|s| s.house_bill_number.as_str())
            .collect()
    }

    fn anchored_today() -> WindowSpec {
        WindowSpec::Anchored {
            anchor: now().date(),
        }
    }

    #[test]
    fn anchored_week_places_same_day_shipments_together() {
        let shipments = vec![
            shipment("a", at(24)),
            shipment("b", at(24)),
            shipment("outside", at(9 * 24)),
            shipment("past", at(-24)),
        ];

        let buckets = build_schedule(&shipments, anchored_today(), &now());

        assert_eq!(buckets.len(), 7);
        assert_eq!(buckets[1].date, date(2026, 10, 20));
        assert_eq!(ids(&buckets[1]), ["a", "b"]);

        let all: Vec<&str> = buckets.iter().flat_map(ids).collect();
        assert_eq!(all, ["a", "b"]);
    }

    #[test]
    fn arrival_exactly_now_is_dropped() {
        let shipments = vec![shipment("now", at(0)), shipment("later", now().timestamp() + 1.second())];

        let buckets = build_schedule(&shipments, WindowSpec::Fixed, &now());

        assert_eq!(ids(&buckets[0]), ["later"]);
    }

    #[test]
    fn earlier_today_is_dropped_but_later_today_is_kept() {
        let shipments = vec![shipment("morning", at(-3)), shipment("evening", at(6))];

        let buckets = build_schedule(&shipments, WindowSpec::Fixed, &now());

        assert_eq!(ids(&buckets[0]), ["evening"]);
    }

    #[test]
    fn bucket_contents_are_sorted_by_arrival() {
        let shipments = vec![
            shipment("late", at(30)),
            shipment("early", at(14)),
            shipment("mid", at(20)),
        ];

        let buckets = build_schedule(&shipments, WindowSpec::Fixed, &now());

        assert_eq!(ids(&buckets[1]), ["early", "mid", "late"]);
    }

    #[test]
    fn equal_arrivals_keep_input_order() {
        let shipments = vec![
            shipment("third", at(50)),
            shipment("first", at(50)),
            shipment("second", at(50)),
        ];

        let buckets = build_schedule(&shipments, WindowSpec::Fixed, &now());

        assert_eq!(ids(&buckets[2]), ["third", "first", "second"]);
    }

    #[test]
    fn dates_ascend_without_gaps() {
        let spec = WindowSpec::Growing {
            weeks: NonZeroU32::new(2).unwrap(),
        };

        let buckets = build_schedule(&[], spec, &now());

        assert_eq!(buckets.len(), 14);
        for pair in buckets.windows(2) {
            assert_eq!(pair[0].date.tomorrow().unwrap(), pair[1].date);
        }
        assert!(buckets.iter().all(|b| b.shipments.is_empty()));
    }

    #[test]
    fn buckets_hold_exactly_the_upcoming_shipments_inside_the_window() {
        let shipments: Vec<Shipment> = (-40..40)
            .map(|i| shipment(&format!("s{i}"), at(i * 7)))
            .collect();

        let windows = [
            WindowSpec::Fixed,
            WindowSpec::one_week(),
            WindowSpec::Growing {
                weeks: NonZeroU32::new(2).unwrap(),
            },
            WindowSpec::Anchored {
                anchor: date(2026, 10, 12),
            },
            WindowSpec::Anchored {
                anchor: date(2026, 10, 23),
            },
        ];

        for window in windows {
            let buckets = build_schedule(&shipments, window, &now());
            let first = buckets[0].date;
            let last = buckets[buckets.len() - 1].date;

            let placed: Vec<&Shipment> = buckets.iter().flat_map(|b| &b.shipments).collect();
            for bucket in &buckets {
                for s in &bucket.shipments {
                    assert!(s.estimated_arrival > now().timestamp());
                    assert_eq!(TimeZone::UTC.to_datetime(s.estimated_arrival).date(), bucket.date);
                }
            }

            let expected: Vec<&Shipment> = shipments
                .iter()
                .filter(|s| s.estimated_arrival > now().timestamp())
                .filter(|s| {
                    let d = TimeZone::UTC.to_datetime(s.estimated_arrival).date();
                    first <= d && d <= last
                })
                .collect();
            assert_eq!(placed, expected, "window {window:?}");
        }
    }

    #[test]
    fn buckets_follow_the_reference_time_zone() {
        // 23:30 UTC is already the next day at UTC+02.
        let zone = TimeZone::fixed(tz::offset(2));
        let now = now().with_time_zone(zone);
        let shipments = vec![shipment("late-evening", "2026-10-20T23:30:00Z".parse().unwrap())];

        let buckets = build_schedule(&shipments, WindowSpec::Fixed, &now);

        assert_eq!(buckets[2].date, date(2026, 10, 21));
        assert_eq!(ids(&buckets[2]), ["late-evening"]);
    }

    #[test]
    fn dst_week_buckets_by_local_calendar_day() {
        // Amsterdam leaves summer time at 01:00 UTC on Sunday 2026-10-25.
        let zone = TimeZone::get("Europe/Amsterdam").unwrap();
        let now = now().with_time_zone(zone);
        let utc = |s: &str| s.parse::<Timestamp>().unwrap();
        let shipments = vec![
            shipment("saturday-late", utc("2026-10-24T21:59:00Z")),
            shipment("before-switch", utc("2026-10-25T00:30:00Z")),
            shipment("after-switch", utc("2026-10-25T22:30:00Z")),
            shipment("monday", utc("2026-10-25T23:30:00Z")),
        ];

        let buckets = build_schedule(&shipments, WindowSpec::Fixed, &now);

        assert_eq!(buckets.len(), 7);
        assert_eq!(buckets[5].date, date(2026, 10, 24));
        assert_eq!(ids(&buckets[5]), ["saturday-late"]);
        assert_eq!(buckets[6].date, date(2026, 10, 25));
        assert_eq!(ids(&buckets[6]), ["before-switch", "after-switch"]);
        assert!(buckets.iter().all(|b| !ids(b).contains(&"monday")));

        let two_weeks = WindowSpec::Growing {
            weeks: NonZeroU32::new(2).unwrap(),
        };
        let buckets = build_schedule(&shipments, two_weeks, &now);
        assert_eq!(buckets.len(), 14);
        assert_eq!(buckets[7].date, date(2026, 10, 26));
        assert_eq!(ids(&buckets[7]), ["monday"]);
    }

    #[test]
    fn anchor_in_the_past_yields_empty_buckets() {
        let shipments = vec![shipment("yesterday", at(-24)), shipment("tomorrow", at(24))];
        let spec = WindowSpec::Anchored {
            anchor: date(2026, 10, 12),
        };

        let buckets = build_schedule(&shipments, spec, &now());

        assert_eq!(buckets.len(), 7);
        assert!(buckets.iter().all(|b| b.shipments.is_empty()));
    }

    #[test]
    fn expanding_k_times_yields_whole_weeks_of_buckets() {
        let mut nav = Navigator::growing();
        for k in 1..=4 {
            nav.apply(NavAction::ExpandRange);
            let buckets = build_schedule(&[], nav.window(), &now());
            assert_eq!(buckets.len(), (1 + k) * 7);
        }
    }

    #[test]
    fn labels_name_the_weekday() {
        assert_eq!(label(date(2026, 10, 19)), "Monday 2026-10-19");
        assert_eq!(label(date(2026, 10, 25)), "Sunday 2026-10-25");
    }
}
