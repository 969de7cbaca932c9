use super::*;

fn draft() -> GroupDraft {
    let mut draft = GroupDraft::default();
    draft.reset(vec![
        ConversationEntry::new("7", Some("Carla")),
        ConversationEntry::new("3", Some("Davi")),
    ]);
    draft
}

#[test]
fn missing_name_is_rejected() {
    let mut draft = draft();
    assert_eq!(draft.to_request(), Err(GroupFormError::MissingName));
    draft.set_name("   ");
    assert_eq!(draft.to_request(), Err(GroupFormError::MissingName));
    assert_eq!(GroupFormError::MissingName.alert_message(), "Digite um nome para o grupo.");
}

#[test]
fn request_trims_name_and_drops_blank_goals() {
    let mut draft = draft();
    draft.set_name("  Pedal de domingo ");
    let first = draft.add_goal();
    let second = draft.add_goal();
    let third = draft.add_goal();
    draft.set_goal(first, " 40km ");
    draft.set_goal(second, "   ");
    draft.set_goal(third, "subir a serra");
    let request = draft.to_request().unwrap();
    assert_eq!(request.name, "Pedal de domingo");
    assert_eq!(request.goals, vec!["40km", "subir a serra"]);
    assert!(request.members.is_empty());
}

#[test]
fn members_are_sorted_and_toggleable() {
    let mut draft = draft();
    draft.set_name("g");
    assert!(draft.toggle_member("7"));
    assert!(draft.toggle_member("3"));
    assert!(draft.toggle_member("9"));
    assert!(!draft.toggle_member("9"));
    assert!(draft.is_member("7"));
    assert_eq!(draft.to_request().unwrap().members, vec!["3", "7"]);
}

#[test]
fn remove_goal_ignores_out_of_range() {
    let mut draft = draft();
    draft.add_goal();
    draft.set_goal(0, "a");
    draft.remove_goal(5);
    draft.set_goal(5, "ignored");
    assert_eq!(draft.goals(), ["a".to_owned()]);
    draft.remove_goal(0);
    assert!(draft.goals().is_empty());
}

#[test]
fn reset_clears_previous_draft() {
    let mut draft = draft();
    draft.set_name("old");
    draft.toggle_member("7");
    draft.add_goal();
    draft.reset(vec![ConversationEntry::new("1", None)]);
    assert!(draft.name.is_empty());
    assert!(!draft.is_member("7"));
    assert!(draft.goals().is_empty());
    assert_eq!(draft.candidates().len(), 1);
}
