use super::*;

fn sample() -> ConversationList {
    let mut list = ConversationList::default();
    list.load(vec![
        ConversationEntry::new("1", Some("Ana")),
        ConversationEntry::new("2", Some("  Bruno ")),
        ConversationEntry::new("3", None),
    ]);
    list
}

#[test]
fn entry_name_is_trimmed_or_defaulted() {
    let list = sample();
    let names: Vec<&str> = list.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Bruno", "Usuário"]);
    assert_eq!(ConversationEntry::new("4", Some("   ")).name, DEFAULT_CONVERSATION_NAME);
}

#[test]
fn remove_ids_drops_deleted_rows() {
    let mut list = sample();
    let removed = list.remove_ids(&["1".to_owned(), "3".to_owned(), "99".to_owned()]);
    assert_eq!(removed, 2);
    assert_eq!(list.ids().collect::<Vec<_>>(), vec!["2"]);
}

#[test]
fn member_candidates_lists_everyone() {
    let list = sample();
    assert_eq!(list.member_candidates().len(), 3);
}
