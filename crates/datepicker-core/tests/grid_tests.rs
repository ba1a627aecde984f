//! Tests for 42-cell month-grid construction: padding runs, weekend
//! computation, flag precedence, and the blocked/today/past markers.

use datepicker_core::{
    build_grid, BlockedDateIndex, BlockedDateRecord, CalendarDate, CellFlag, Constraints,
    DateCell, VisibleMonth, GRID_CELLS,
};

fn blocked(entries: &[(&str, &str)]) -> BlockedDateIndex {
    let records: Vec<BlockedDateRecord> = entries
        .iter()
        .map(|(day, reason)| BlockedDateRecord {
            day: day.to_string(),
            reason: reason.to_string(),
        })
        .collect();
    let (index, rejected) = BlockedDateIndex::build(&records);
    assert!(rejected.is_empty());
    index
}

/// The widget's historical blocked-day configuration.
fn fixture_constraints() -> Constraints {
    Constraints {
        min_date: None,
        blocked: blocked(&[
            ("2020-03-30", "Nu onorăm comenzi în această zi."),
            ("2020-04-1", "Nu onorăm comenzi în această zi."),
            ("2020-04-2", "Nu onorăm comenzi în această zi."),
            ("2020-04-3", "Nu onorăm comenzi în această zi."),
        ]),
    }
}

fn date(s: &str) -> CalendarDate {
    CalendarDate::parse_iso(s).unwrap()
}

/// Cell for a given day of the month, given the left-padding count.
fn day_cell(cells: &[DateCell], left_padding: usize, day: u32) -> &DateCell {
    let cell = &cells[left_padding + day as usize - 1];
    assert_eq!(cell.display, day.to_string());
    cell
}

fn leading_padding(cells: &[DateCell]) -> usize {
    cells
        .iter()
        .take_while(|c| c.flag == CellFlag::Padding)
        .count()
}

// ── Shape invariants ────────────────────────────────────────────────────────

#[test]
fn grid_always_has_42_cells() {
    let today = date("2020-03-15");
    for (year, month) in [(2020, 2), (2020, 3), (2020, 1), (1999, 11), (2024, 0)] {
        let cells = build_grid(
            VisibleMonth { year, month },
            today,
            &Constraints::default(),
            None,
        );
        assert_eq!(cells.len(), GRID_CELLS, "{}-{}", year, month);
    }
}

#[test]
fn padding_plus_days_fills_the_grid_exactly() {
    let today = date("2020-03-15");
    // March 2020 starts on a Sunday: a full leading week of padding,
    // 31 day cells, 4 trailing padding cells.
    let cells = build_grid(
        VisibleMonth {
            year: 2020,
            month: 2,
        },
        today,
        &Constraints::default(),
        None,
    );

    assert_eq!(leading_padding(&cells), 7);
    let day_count = cells
        .iter()
        .filter(|c| c.flag != CellFlag::Padding)
        .count();
    assert_eq!(day_count, 31);
    for cell in &cells[38..] {
        assert_eq!(cell.flag, CellFlag::Padding);
        assert!(cell.display.is_empty());
    }
}

#[test]
fn monday_start_month_gets_one_padding_cell() {
    // June 2020 starts on a Monday.
    let cells = build_grid(
        VisibleMonth {
            year: 2020,
            month: 5,
        },
        date("2020-03-15"),
        &Constraints::default(),
        None,
    );

    assert_eq!(leading_padding(&cells), 1);
    assert_eq!(cells[1].display, "1");
}

// ── The March 2020 reference scenario ───────────────────────────────────────

#[test]
fn march_2020_reference_grid() {
    let today = date("2020-03-15");
    let cells = build_grid(
        VisibleMonth {
            year: 2020,
            month: 2,
        },
        today,
        &fixture_constraints(),
        None,
    );

    assert_eq!(cells.len(), GRID_CELLS);
    assert_eq!(leading_padding(&cells), 7);

    // Weekend day numbers for a Sunday-start month: Saturdays 7/14/21/28,
    // Sundays 1/8/15/22. Day 29 (a real Sunday) falls past the pair
    // cutoff and is not flagged.
    let weekend = [1, 7, 8, 14, 15, 21, 22, 28];
    for day in weekend {
        assert_eq!(
            day_cell(&cells, 7, day).flag,
            CellFlag::Weekend,
            "day {}",
            day
        );
    }

    // Days before today are past, unless weekend.
    for day in [2, 3, 4, 5, 6, 9, 10, 11, 12, 13] {
        assert_eq!(day_cell(&cells, 7, day).flag, CellFlag::Past, "day {}", day);
    }

    // Day 15 is today but also a Sunday; weekend takes precedence.
    assert_eq!(day_cell(&cells, 7, 15).flag, CellFlag::Weekend);

    // Days after today are usable, unless weekend or blocked.
    for day in [16, 17, 18, 19, 20, 23, 24, 25, 26, 27, 29, 31] {
        assert_eq!(
            day_cell(&cells, 7, day).flag,
            CellFlag::Usable,
            "day {}",
            day
        );
    }

    let thirtieth = day_cell(&cells, 7, 30);
    assert_eq!(thirtieth.flag, CellFlag::Blocked);
    assert_eq!(
        thirtieth.tooltip.as_deref(),
        Some("Nu onorăm comenzi în această zi.")
    );
}

#[test]
fn weekday_today_is_flagged_today() {
    // 2020-03-17 was a Tuesday, so no weekend flag competes.
    let today = date("2020-03-17");
    let cells = build_grid(
        VisibleMonth {
            year: 2020,
            month: 2,
        },
        today,
        &Constraints::default(),
        None,
    );

    assert_eq!(day_cell(&cells, 7, 17).flag, CellFlag::Today);
    assert_eq!(day_cell(&cells, 7, 16).flag, CellFlag::Past);
    assert_eq!(day_cell(&cells, 7, 18).flag, CellFlag::Usable);
}

// ── Navigation into April ───────────────────────────────────────────────────

#[test]
fn april_2020_after_next_month_navigation() {
    let today = date("2020-03-15");
    let mut visible = VisibleMonth {
        year: 2020,
        month: 2,
    };
    visible.advance();
    assert_eq!(visible.month, 3);

    let cells = build_grid(visible, today, &fixture_constraints(), None);

    // April 2020 starts on a Wednesday: three leading padding cells.
    assert_eq!(leading_padding(&cells), 3);

    for day in [1, 2, 3] {
        let cell = day_cell(&cells, 3, day);
        assert_eq!(cell.flag, CellFlag::Blocked, "day {}", day);
        assert_eq!(
            cell.tooltip.as_deref(),
            Some("Nu onorăm comenzi în această zi.")
        );
    }

    // Saturdays 4/11/18/25 and Sundays 5/12/19/26.
    for day in [4, 5, 11, 12, 18, 19, 25, 26] {
        assert_eq!(
            day_cell(&cells, 3, day).flag,
            CellFlag::Weekend,
            "day {}",
            day
        );
    }

    // A future month: the rest is usable.
    for day in [6, 10, 15, 20, 30] {
        assert_eq!(
            day_cell(&cells, 3, day).flag,
            CellFlag::Usable,
            "day {}",
            day
        );
    }

    // 3 + 30 day cells leaves 9 trailing padding cells.
    for cell in &cells[33..] {
        assert_eq!(cell.flag, CellFlag::Padding);
    }
}

// ── Past months ─────────────────────────────────────────────────────────────

#[test]
fn earlier_month_is_entirely_past_except_weekends() {
    let today = date("2020-03-15");
    let cells = build_grid(
        VisibleMonth {
            year: 2020,
            month: 1,
        },
        today,
        &Constraints::default(),
        None,
    );

    // February 2020 starts on a Saturday.
    assert_eq!(leading_padding(&cells), 6);
    let weekend = [1, 2, 8, 9, 15, 16, 22, 23, 29];
    for day in 1..=29u32 {
        let expected = if weekend.contains(&day) {
            CellFlag::Weekend
        } else {
            CellFlag::Past
        };
        assert_eq!(day_cell(&cells, 6, day).flag, expected, "day {}", day);
    }
}

#[test]
fn earlier_month_in_a_later_year_is_not_past() {
    // January 2021 is after March 2020 even though 0 < 2.
    let cells = build_grid(
        VisibleMonth {
            year: 2021,
            month: 0,
        },
        date("2020-03-15"),
        &Constraints::default(),
        None,
    );

    assert!(cells
        .iter()
        .all(|c| c.flag != CellFlag::Past && c.flag != CellFlag::Today));
}

// ── Flag precedence ─────────────────────────────────────────────────────────

#[test]
fn selected_wins_over_blocked() {
    let today = date("2020-03-15");
    let cells = build_grid(
        VisibleMonth {
            year: 2020,
            month: 3,
        },
        today,
        &fixture_constraints(),
        Some(date("2020-04-02")),
    );

    let second = day_cell(&cells, 3, 2);
    assert_eq!(second.flag, CellFlag::Selected);
    assert_eq!(second.tooltip, None);

    // Its neighbours stay blocked.
    assert_eq!(day_cell(&cells, 3, 1).flag, CellFlag::Blocked);
    assert_eq!(day_cell(&cells, 3, 3).flag, CellFlag::Blocked);
}

#[test]
fn selection_in_another_month_does_not_mark_cells() {
    let cells = build_grid(
        VisibleMonth {
            year: 2020,
            month: 2,
        },
        date("2020-03-15"),
        &Constraints::default(),
        Some(date("2020-04-20")),
    );

    assert!(cells.iter().all(|c| c.flag != CellFlag::Selected));
}

#[test]
fn selection_matches_on_the_exact_year() {
    // Unlike blocked days, the selection marker does not recur across
    // years.
    let cells = build_grid(
        VisibleMonth {
            year: 2021,
            month: 3,
        },
        date("2020-03-15"),
        &Constraints::default(),
        Some(date("2020-04-20")),
    );

    assert!(cells.iter().all(|c| c.flag != CellFlag::Selected));
}

#[test]
fn blocked_wins_over_today() {
    let constraints = Constraints {
        min_date: None,
        blocked: blocked(&[("2020-03-17", "R")]),
    };
    let cells = build_grid(
        VisibleMonth {
            year: 2020,
            month: 2,
        },
        date("2020-03-17"),
        &constraints,
        None,
    );

    assert_eq!(day_cell(&cells, 7, 17).flag, CellFlag::Blocked);
}

// ── Weekend pair cutoff ─────────────────────────────────────────────────────

#[test]
fn trailing_saturday_without_a_sunday_partner_is_not_flagged() {
    // October 2020 starts on a Thursday; day 31 is a Saturday, but its
    // Sunday partner would be day 32, so the pair is cut off.
    let cells = build_grid(
        VisibleMonth {
            year: 2020,
            month: 9,
        },
        date("2020-03-15"),
        &Constraints::default(),
        None,
    );

    assert_eq!(leading_padding(&cells), 4);
    for day in [3, 4, 10, 11, 17, 18, 24, 25] {
        assert_eq!(
            day_cell(&cells, 4, day).flag,
            CellFlag::Weekend,
            "day {}",
            day
        );
    }
    assert_eq!(day_cell(&cells, 4, 31).flag, CellFlag::Usable);
}
