use pressnote_core::db::open_db_in_memory;
use pressnote_core::{
    routes, Identity, NewComment, NewNewsItem, NewsId, NewsRepository, NewsService, SiteConfig,
    SqliteNewsRepository,
};
use rusqlite::Connection;

const AUTHOR: Identity = Identity::Authenticated(1);
const NOT_AUTHOR: Identity = Identity::Authenticated(2);

fn news_service(conn: &Connection) -> NewsService<SqliteNewsRepository<'_>> {
    NewsService::new(SqliteNewsRepository::new(conn), SiteConfig::default())
}

fn seed_news(conn: &Connection) -> NewsId {
    SqliteNewsRepository::new(conn)
        .create_news(&NewNewsItem {
            title: "Заголовок".to_string(),
            body: "Текст новости".to_string(),
            published_at: 1_000,
        })
        .unwrap()
}

fn seed_comment(conn: &Connection, news_id: NewsId) -> i64 {
    SqliteNewsRepository::new(conn)
        .create_comment(&NewComment {
            news_id,
            author_id: 1,
            text: "Комментарий".to_string(),
            created_at: 1_000,
        })
        .unwrap()
}

#[test]
fn home_and_detail_are_public() {
    let conn = open_db_in_memory().unwrap();
    let news_id = seed_news(&conn);
    let service = news_service(&conn);

    assert_eq!(service.home_page().unwrap().len(), 1);
    for identity in [Identity::Anonymous, AUTHOR, NOT_AUTHOR] {
        let outcome = service.detail(identity, news_id).unwrap();
        assert_eq!(outcome.status(), 200);
    }
}

#[test]
fn detail_of_unknown_news_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = news_service(&conn);

    let outcome = service.detail(Identity::Anonymous, 777).unwrap();
    assert_eq!(outcome.status(), 404);
}

#[test]
fn author_can_open_comment_edit_and_delete_pages() {
    let conn = open_db_in_memory().unwrap();
    let news_id = seed_news(&conn);
    let comment_id = seed_comment(&conn, news_id);
    let service = news_service(&conn);

    for path in [routes::comment_edit(comment_id), routes::comment_delete(comment_id)] {
        let outcome = service.comment_page(AUTHOR, comment_id, &path).unwrap();
        assert_eq!(outcome.status(), 200);
    }
}

#[test]
fn not_author_gets_not_found_on_comment_pages() {
    let conn = open_db_in_memory().unwrap();
    let news_id = seed_news(&conn);
    let comment_id = seed_comment(&conn, news_id);
    let service = news_service(&conn);

    for path in [routes::comment_edit(comment_id), routes::comment_delete(comment_id)] {
        let outcome = service.comment_page(NOT_AUTHOR, comment_id, &path).unwrap();
        assert_eq!(outcome.status(), 404);
    }
}

#[test]
fn anonymous_is_redirected_to_login_with_next() {
    let conn = open_db_in_memory().unwrap();
    let news_id = seed_news(&conn);
    let comment_id = seed_comment(&conn, news_id);
    let service = news_service(&conn);

    for path in [routes::comment_edit(comment_id), routes::comment_delete(comment_id)] {
        let outcome = service
            .comment_page(Identity::Anonymous, comment_id, &path)
            .unwrap();
        assert_eq!(outcome.status(), 302);
        assert_eq!(
            outcome.location(),
            Some(format!("/auth/login/?next={path}").as_str())
        );
    }
}

#[test]
fn unknown_comment_is_not_found_for_authenticated_and_redirect_for_anonymous() {
    let conn = open_db_in_memory().unwrap();
    seed_news(&conn);
    let service = news_service(&conn);
    let path = routes::comment_edit(99);

    let outcome = service.comment_page(AUTHOR, 99, &path).unwrap();
    assert_eq!(outcome.status(), 404);

    let outcome = service.comment_page(Identity::Anonymous, 99, &path).unwrap();
    assert_eq!(outcome.status(), 302);
}
