use jobtracker::app::view::match_ranges;
use jobtracker::app::{count_by_status, derive_view, StatusCounts};
use jobtracker::domain::{JobApplication, Status, StatusFilter};

fn app(id: &str, company: &str, role: &str, status: Status, created_at: i64) -> JobApplication {
    JobApplication {
        id: id.to_string(),
        company: company.to_string(),
        role: role.to_string(),
        date: "2026-10-01".to_string(),
        status,
        created_at,
    }
}

fn sample() -> Vec<JobApplication> {
    vec![
        app("1", "Acme", "Backend Engineer", Status::Applied, 10),
        app("2", "Skyline", "Data Analyst", Status::Interview, 30),
        app("3", "Globex", "Product Manager", Status::Offer, 20),
        app("4", "Initech", "Analyst", Status::Rejected, 40),
        app("5", "Umbrella", "Designer", Status::Applied, 5),
    ]
}

fn ids(view: &[&JobApplication]) -> Vec<String> {
    view.iter().map(|app| app.id.clone()).collect()
}

#[test]
fn all_filter_returns_everything_newest_first() {
    let apps = sample();
    let view = derive_view(&apps, StatusFilter::All, "");

    assert_eq!(ids(&view), ["4", "2", "3", "1", "5"]);
}

#[test]
fn status_filter_keeps_only_that_status() {
    let apps = sample();
    let view = derive_view(&apps, StatusFilter::Only(Status::Applied), "");

    assert_eq!(ids(&view), ["1", "5"]);
    assert!(view.iter().all(|app| app.status == Status::Applied));
}

#[test]
fn search_is_case_insensitive_across_company_role_and_status() {
    let apps = sample();

    assert_eq!(ids(&derive_view(&apps, StatusFilter::All, "ACME")), ["1"]);
    assert_eq!(ids(&derive_view(&apps, StatusFilter::All, "analyst")), ["4", "2"]);
    assert_eq!(ids(&derive_view(&apps, StatusFilter::All, "offer")), ["3"]);
    assert_eq!(ids(&derive_view(&apps, StatusFilter::All, "  glob  ")), ["3"]);
}

#[test]
fn blank_query_matches_everything() {
    let apps = sample();
    assert_eq!(derive_view(&apps, StatusFilter::All, "   ").len(), apps.len());
}

#[test]
fn filter_and_search_combine() {
    let apps = sample();
    let view = derive_view(&apps, StatusFilter::Only(Status::Interview), "analyst");

    assert_eq!(ids(&view), ["2"]);
}

#[test]
fn no_match_yields_empty_view() {
    let apps = sample();
    assert!(derive_view(&apps, StatusFilter::All, "nothing like this").is_empty());
}

#[test]
fn equal_timestamps_keep_collection_order() {
    let apps = vec![
        app("a", "A", "r", Status::Applied, 7),
        app("b", "B", "r", Status::Applied, 7),
    ];
    assert_eq!(ids(&derive_view(&apps, StatusFilter::All, "")), ["a", "b"]);
}

#[test]
fn counts_cover_every_status() {
    let counts = count_by_status(&sample());

    assert_eq!(
        counts,
        StatusCounts {
            total: 5,
            applied: 2,
            interview: 1,
            offer: 1,
            rejected: 1,
        }
    );
    assert_eq!(counts.get(StatusFilter::All), 5);
    assert_eq!(counts.get(StatusFilter::Only(Status::Applied)), 2);
}

#[test]
fn counts_ignore_filter_and_search() {
    let apps = sample();
    let visible = derive_view(&apps, StatusFilter::Only(Status::Offer), "globex");

    assert_eq!(visible.len(), 1);
    assert_eq!(count_by_status(&apps).total, 5);
}

#[test]
fn match_ranges_find_each_occurrence() {
    assert_eq!(match_ranges("Skyline", "SKY"), vec![(0, 3)]);
    assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
    assert!(match_ranges("Acme", "xyz").is_empty());
}

#[test]
fn filtering_and_highlighting_fold_case_the_same_way() {
    let apps = vec![app("1", "İzmir Tech", "Engineer", Status::Applied, 1)];

    let view = derive_view(&apps, StatusFilter::All, "iz");
    assert_eq!(ids(&view), ["1"]);
    assert_eq!(match_ranges(&view[0].company, "iz"), vec![(0, 2)]);

    for app in derive_view(&apps, StatusFilter::All, "tech") {
        assert!(!match_ranges(&app.company, "tech").is_empty());
    }
}
