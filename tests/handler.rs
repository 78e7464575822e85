use jobtracker::app::{AppState, ApplicationStore};
use jobtracker::domain::{NewApplication, Status, StatusFilter};
use jobtracker::storage::{load_applications, MemoryStorage};
use jobtracker::{handle_event, Action, Event, Theme};

fn state() -> AppState<MemoryStorage> {
    AppState::new(ApplicationStore::open(MemoryStorage::default()), Theme::default())
}

fn add(state: &mut AppState<MemoryStorage>, company: &str, role: &str) -> String {
    handle_event(
        state,
        &Event::AddApplication(NewApplication::new(company, role)),
    )
    .unwrap();
    state.store.applications()[0].id.clone()
}

#[test]
fn add_renders_with_notice() {
    let mut state = state();
    let (render, actions) = handle_event(
        &mut state,
        &Event::AddApplication(NewApplication::new("Acme", "Engineer")),
    )
    .unwrap();

    assert!(render);
    assert_eq!(actions.len(), 2);
    assert!(matches!(&actions[0], Action::Notice(text) if text.starts_with("Added Acme (Engineer) as Applied")));
    assert_eq!(actions[1], Action::Render);
}

#[test]
fn rejected_add_does_nothing() {
    let mut state = state();
    let result = handle_event(
        &mut state,
        &Event::AddApplication(NewApplication::new("", "Engineer")),
    )
    .unwrap();

    assert_eq!(result, (false, vec![]));
    assert!(state.store.is_empty());
}

#[test]
fn update_and_remove_render_only_when_found() {
    let mut state = state();
    let id = add(&mut state, "Acme", "Engineer");

    let (render, _) = handle_event(
        &mut state,
        &Event::UpdateStatus {
            id: id.clone(),
            status: Status::Interview,
        },
    )
    .unwrap();
    assert!(render);
    assert_eq!(state.store.get(&id).unwrap().status, Status::Interview);

    let missing = handle_event(
        &mut state,
        &Event::RemoveApplication {
            id: "missing".to_string(),
        },
    )
    .unwrap();
    assert_eq!(missing, (false, vec![]));

    let (render, _) = handle_event(&mut state, &Event::RemoveApplication { id }).unwrap();
    assert!(render);
    assert!(state.store.is_empty());
}

#[test]
fn clear_asks_for_confirmation_first() {
    let mut state = state();
    add(&mut state, "Acme", "Engineer");
    add(&mut state, "Sky", "Analyst");

    let (render, actions) = handle_event(&mut state, &Event::ClearAll).unwrap();
    assert!(!render);
    assert_eq!(actions, vec![Action::ConfirmClear { count: 2 }]);
    assert!(state.pending_clear);
    assert_eq!(state.store.len(), 2);

    let (render, actions) = handle_event(&mut state, &Event::ConfirmClear(true)).unwrap();
    assert!(render);
    assert_eq!(actions[0], Action::Notice("Cleared 2 applications".to_string()));
    assert!(state.store.is_empty());
    assert!(!state.pending_clear);
    assert!(load_applications(state.store.storage()).is_empty());
}

#[test]
fn declined_clear_keeps_everything() {
    let mut state = state();
    add(&mut state, "Acme", "Engineer");

    handle_event(&mut state, &Event::ClearAll).unwrap();
    let result = handle_event(&mut state, &Event::ConfirmClear(false)).unwrap();

    assert_eq!(result, (false, vec![]));
    assert_eq!(state.store.len(), 1);
    assert!(!state.pending_clear);
}

#[test]
fn confirmation_without_request_is_ignored() {
    let mut state = state();
    add(&mut state, "Acme", "Engineer");

    let result = handle_event(&mut state, &Event::ConfirmClear(true)).unwrap();
    assert_eq!(result, (false, vec![]));
    assert_eq!(state.store.len(), 1);
}

#[test]
fn clear_on_empty_store_is_ignored() {
    let mut state = state();
    let result = handle_event(&mut state, &Event::ClearAll).unwrap();

    assert_eq!(result, (false, vec![]));
    assert!(!state.pending_clear);
}

#[test]
fn clear_without_confirmation_setting_clears_directly() {
    let mut state = state();
    state.confirm_clear = false;
    add(&mut state, "Acme", "Engineer");

    let (render, _) = handle_event(&mut state, &Event::ClearAll).unwrap();
    assert!(render);
    assert!(state.store.is_empty());
}

#[test]
fn filter_and_search_render_only_on_change() {
    let mut state = state();
    add(&mut state, "Acme", "Engineer");

    let filter = Event::SetStatusFilter(StatusFilter::Only(Status::Offer));
    assert!(handle_event(&mut state, &filter).unwrap().0);
    assert!(!handle_event(&mut state, &filter).unwrap().0);
    assert!(state.visible().is_empty());

    let search = Event::SetSearch("acme".to_string());
    assert!(handle_event(&mut state, &search).unwrap().0);
    assert!(!handle_event(&mut state, &search).unwrap().0);

    handle_event(&mut state, &Event::SetStatusFilter(StatusFilter::All)).unwrap();
    assert_eq!(state.visible().len(), 1);
    assert_eq!(state.counts().total, 1);
}

#[test]
fn changes_after_the_prompt_cancel_the_pending_clear() {
    let mut state = state();
    add(&mut state, "Acme", "Engineer");

    let (_, actions) = handle_event(&mut state, &Event::ClearAll).unwrap();
    assert_eq!(actions, vec![Action::ConfirmClear { count: 1 }]);

    add(&mut state, "Sky", "Analyst");
    add(&mut state, "Globex", "Manager");
    assert!(!state.pending_clear);

    let result = handle_event(&mut state, &Event::ConfirmClear(true)).unwrap();
    assert_eq!(result, (false, vec![]));
    assert_eq!(state.store.len(), 3);
}

#[test]
fn status_change_or_removal_also_cancels_the_pending_clear() {
    let mut state = state();
    let first = add(&mut state, "Acme", "Engineer");
    let second = add(&mut state, "Sky", "Analyst");

    handle_event(&mut state, &Event::ClearAll).unwrap();
    handle_event(
        &mut state,
        &Event::UpdateStatus {
            id: first,
            status: Status::Offer,
        },
    )
    .unwrap();
    assert!(!state.pending_clear);

    handle_event(&mut state, &Event::ClearAll).unwrap();
    handle_event(&mut state, &Event::RemoveApplication { id: second }).unwrap();
    assert!(!state.pending_clear);

    handle_event(&mut state, &Event::ConfirmClear(true)).unwrap();
    assert_eq!(state.store.len(), 1);
}

#[test]
fn filter_change_keeps_the_pending_clear() {
    let mut state = state();
    add(&mut state, "Acme", "Engineer");

    handle_event(&mut state, &Event::ClearAll).unwrap();
    handle_event(&mut state, &Event::SetSearch("acme".to_string())).unwrap();

    let (render, _) = handle_event(&mut state, &Event::ConfirmClear(true)).unwrap();
    assert!(render);
    assert!(state.store.is_empty());
}

#[test]
fn clear_notice_uses_singular_for_one() {
    let mut state = state();
    state.confirm_clear = false;
    add(&mut state, "Acme", "Engineer");

    let (_, actions) = handle_event(&mut state, &Event::ClearAll).unwrap();
    assert_eq!(actions[0], Action::Notice("Cleared 1 application".to_string()));
}
