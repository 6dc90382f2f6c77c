use pressnote_core::db::open_db_in_memory;
use pressnote_core::{
    routes, Identity, NewNote, NoteRepository, NoteService, SiteConfig, SqliteNoteRepository,
    UserId,
};
use rusqlite::Connection;

fn note_service(conn: &Connection) -> NoteService<SqliteNoteRepository<'_>> {
    NoteService::new(SqliteNoteRepository::new(conn), SiteConfig::default())
}

fn seed_note(conn: &Connection, owner_id: UserId, slug: &str) {
    SqliteNoteRepository::new(conn)
        .create_note(&NewNote {
            owner_id,
            title: "Тестовая заметка".to_string(),
            text: "Текст заметки".to_string(),
            slug: slug.to_string(),
        })
        .unwrap();
}

#[test]
fn list_shows_only_the_callers_notes() {
    let conn = open_db_in_memory().unwrap();
    seed_note(&conn, 1, "authors-first");
    seed_note(&conn, 2, "foreign-note");
    seed_note(&conn, 1, "authors-second");
    let service = note_service(&conn);

    let listed = service
        .list(Identity::Authenticated(1), &routes::notes_list())
        .unwrap()
        .into_value()
        .unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|note| note.owner_id == 1));

    let listed = service
        .list(Identity::Authenticated(2), &routes::notes_list())
        .unwrap()
        .into_value()
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].slug, "foreign-note");
}

#[test]
fn list_is_empty_for_a_user_without_notes() {
    let conn = open_db_in_memory().unwrap();
    seed_note(&conn, 1, "authors-note");
    let service = note_service(&conn);

    let listed = service
        .list(Identity::Authenticated(3), &routes::notes_list())
        .unwrap()
        .into_value()
        .unwrap();
    assert!(listed.is_empty());
}

#[test]
fn note_page_returns_the_full_record_to_its_owner() {
    let conn = open_db_in_memory().unwrap();
    seed_note(&conn, 1, "test-note");
    let service = note_service(&conn);

    let note = service
        .note_page(Identity::Authenticated(1), "test-note", &routes::note_detail("test-note"))
        .unwrap()
        .into_value()
        .unwrap();
    assert_eq!(note.owner_id, 1);
    assert_eq!(note.title, "Тестовая заметка");
    assert_eq!(note.text, "Текст заметки");
    assert_eq!(note.slug, "test-note");
}
