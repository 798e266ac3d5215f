use crate::models::{AppData, RatingEvent, RatingType, StatsSnapshot, StoredRating};
use chrono::{NaiveDate, NaiveDateTime};

pub const HISTORY_LIMIT: usize = 100;

/// Appends a rating stamped at `now`, numbering it after the highest
/// number already given to the same type that day.
pub fn record_rating_at(data: &mut AppData, rating: RatingType, now: NaiveDateTime) -> StoredRating {
    let date = date_key(now.date());
    let sequential_number = max_sequential(data, &date, rating).saturating_add(1);

    data.next_id = data.next_id.saturating_add(1);
    let stored = StoredRating {
        id: data.next_id,
        tipo: rating,
        avaliacao_date: date,
        avaliacao_time: now.format("%H:%M").to_string(),
        sequential_number,
    };
    data.ratings.push(stored.clone());
    stored
}

pub fn stats_at(today: NaiveDate, data: &AppData) -> StatsSnapshot {
    let date = date_key(today);
    let mut snapshot = StatsSnapshot::default();
    for rating in RatingType::ALL {
        snapshot.set(rating, max_sequential(data, &date, rating));
    }
    snapshot
}

/// Today's ratings, newest first.
pub fn history_at(today: NaiveDate, data: &AppData) -> Vec<RatingEvent> {
    let date = date_key(today);
    let mut todays: Vec<&StoredRating> = data
        .ratings
        .iter()
        .filter(|rating| rating.avaliacao_date == date)
        .collect();
    todays.sort_by(|a, b| b.id.cmp(&a.id));

    todays
        .into_iter()
        .take(HISTORY_LIMIT)
        .map(|rating| RatingEvent {
            tipo: rating.tipo,
            sequential_number: rating.sequential_number,
            avaliacao_date: rating.avaliacao_date.clone(),
            avaliacao_time: rating.avaliacao_time.clone(),
        })
        .collect()
}

/// Every rating ever stored, newest first.
pub fn all_newest_first(data: &AppData) -> Vec<&StoredRating> {
    let mut all: Vec<&StoredRating> = data.ratings.iter().collect();
    all.sort_by(|a, b| b.id.cmp(&a.id));
    all
}

fn max_sequential(data: &AppData, date: &str, rating: RatingType) -> u64 {
    data.ratings
        .iter()
        .filter(|stored| stored.tipo == rating && stored.avaliacao_date == date)
        .map(|stored| stored.sequential_number)
        .max()
        .unwrap_or(0)
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn sequential_numbers_are_per_type_and_per_day() {
        let mut data = AppData::default();
        let first = record_rating_at(&mut data, RatingType::Satisfied, at(2, 9, 5));
        let second = record_rating_at(&mut data, RatingType::Satisfied, at(2, 9, 7));
        let other = record_rating_at(&mut data, RatingType::Unsatisfied, at(2, 9, 8));
        let next_day = record_rating_at(&mut data, RatingType::Satisfied, at(3, 8, 0));

        assert_eq!(first.sequential_number, 1);
        assert_eq!(second.sequential_number, 2);
        assert_eq!(other.sequential_number, 1);
        assert_eq!(next_day.sequential_number, 1);
        assert_eq!(second.avaliacao_time, "09:07");
        assert_eq!(second.avaliacao_date, "2026-03-02");
        assert_eq!(next_day.id, 4);
    }

    #[test]
    fn stats_only_count_the_requested_day() {
        let mut data = AppData::default();
        record_rating_at(&mut data, RatingType::VerySatisfied, at(2, 10, 0));
        record_rating_at(&mut data, RatingType::VerySatisfied, at(2, 10, 1));
        record_rating_at(&mut data, RatingType::Satisfied, at(2, 10, 2));
        record_rating_at(&mut data, RatingType::Unsatisfied, at(1, 18, 0));

        let stats = stats_at(at(2, 0, 0).date(), &data);
        assert_eq!(stats.very_satisfied, 2);
        assert_eq!(stats.satisfied, 1);
        assert_eq!(stats.unsatisfied, 0);
    }

    #[test]
    fn history_is_newest_first_and_capped() {
        let mut data = AppData::default();
        for minute in 0..(HISTORY_LIMIT as u32 + 5) {
            record_rating_at(&mut data, RatingType::Satisfied, at(2, 11, minute % 60));
        }
        record_rating_at(&mut data, RatingType::Satisfied, at(1, 11, 0));

        let history = history_at(at(2, 0, 0).date(), &data);
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0].sequential_number, HISTORY_LIMIT as u64 + 5);
        assert!(history.windows(2).all(|pair| pair[0].sequential_number > pair[1].sequential_number));
    }
}
