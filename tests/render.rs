use jobtracker::app::{AppState, ApplicationStore};
use jobtracker::domain::{NewApplication, Status, StatusFilter};
use jobtracker::storage::MemoryStorage;
use jobtracker::ui::{render, Theme};

fn state_with(apps: &[(&str, &str, Status)]) -> AppState<MemoryStorage> {
    let mut store = ApplicationStore::open(MemoryStorage::default());
    for (company, role, status) in apps {
        store
            .add(NewApplication::new(*company, *role).with_date("2026-10-01").with_status(*status))
            .unwrap();
    }
    AppState::new(store, Theme::default())
}

fn plain(state: &AppState<MemoryStorage>, cols: usize) -> String {
    let mut out = Vec::new();
    render(state, cols, false, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn empty_store_shows_empty_state() {
    let text = plain(&state_with(&[]), 80);

    assert!(text.contains("Job Tracker (0)"));
    assert!(text.contains("No applications yet."));
    assert!(text.contains("[All (0)]"));
    assert!(!text.contains("COMPANY"));
}

#[test]
fn rows_and_chip_counts_are_listed() {
    let state = state_with(&[
        ("Acme", "Engineer", Status::Applied),
        ("Skyline", "Data Analyst", Status::Offer),
    ]);
    let text = plain(&state, 100);

    assert!(text.contains("COMPANY"));
    assert!(text.contains("Acme"));
    assert!(text.contains("Data Analyst"));
    assert!(text.contains("2026-10-01"));
    assert!(text.contains("[All (2)]"));
    assert!(text.contains("Applied (1)"));
    assert!(text.contains("Offer (1)"));
    assert!(text.contains("Rejected (0)"));
    assert!(text.find("Skyline").unwrap() < text.find("Acme").unwrap());
}

#[test]
fn plain_output_has_no_escape_sequences() {
    let state = state_with(&[("Acme", "Engineer", Status::Interview)]);
    assert!(!plain(&state, 80).contains('\u{1b}'));
}

#[test]
fn colored_output_uses_theme() {
    let state = state_with(&[("Acme", "Engineer", Status::Interview)]);
    let mut out = Vec::new();
    render(&state, 80, true, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains(&Theme::fg(&state.theme.colors.status_interview)));
}

#[test]
fn search_without_matches_explains_why() {
    let mut state = state_with(&[("Acme", "Engineer", Status::Applied)]);
    state.status_filter = StatusFilter::Only(Status::Offer);
    state.search_query = "zzz".to_string();
    let text = plain(&state, 80);

    assert!(text.contains("No applications match."));
    assert!(text.contains("zzz"));
    assert!(!text.contains("No applications yet."));
}

#[test]
fn long_values_are_truncated_to_fit() {
    let long_company = "Extremely Long Company Name Incorporated International";
    let state = state_with(&[(long_company, "Engineer", Status::Applied)]);
    let text = plain(&state, 80);

    assert!(!text.contains(long_company));
    assert!(text.contains("..."));
}
