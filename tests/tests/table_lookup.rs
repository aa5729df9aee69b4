use tests::*;

use trestle::Table;

#[test]
fn table_reports_its_bound_name() {
    let db = blog_db();
    let users: Table<User> = Table::new(&db, "user");

    assert_eq!(users.name(), "user");
}

#[test]
fn find_by_id_round_trips_primary_key() {
    let db = blog_db();
    let users: Table<User> = Table::new(&db, "user");

    let user = users.find_by_id(1).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.username, "jdoe");
    assert_eq!(user.email, "john@example.com");
}

#[test]
fn find_by_id_missing_row_is_not_found() {
    let db = blog_db();
    let users: Table<User> = Table::new(&db, "user");

    let err = users.find_by_id(999).unwrap_err();
    assert!(err.is_record_not_found());
    assert_eq!(err.to_string(), "record not found: table=user key=999");
}

#[test]
fn find_by_column_on_unique_column() {
    let db = blog_db();
    let users: Table<User> = Table::new(&db, "user");

    let user = users.find_by_column("username", "nhuerta").unwrap();
    assert_eq!(user.id, 2);
}

#[test]
fn find_by_column_missing_row_is_not_found() {
    let db = blog_db();
    let posts: Table<Post> = Table::new(&db, "post");

    let err = posts.find_by_column("slug", "nope").unwrap_err();
    assert!(err.is_record_not_found());
    assert_eq!(err.to_string(), "record not found: table=post key=nope");
}

// Two posts share the slug `draft`; the smallest primary key must win. This
// pins the documented tie-break.
#[test]
fn find_by_column_duplicate_value_returns_smallest_id() {
    let db = blog_db();
    let posts: Table<Post> = Table::new(&db, "post");

    let post = posts.find_by_column("slug", "draft").unwrap();
    assert_eq!(post.id, 2);
    assert_eq!(post.name, "Spring notes");
}

#[test]
fn all_returns_rows_in_primary_key_order() {
    let db = blog_db();
    let categories: Table<Category> = Table::new(&db, "category");

    let all = categories.all().unwrap();
    let ids: Vec<_> = all.iter().map(|c| c.id).collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[test]
fn loaded_entity_parses_stored_datetime() {
    let db = blog_db();
    let users: Table<User> = Table::new(&db, "user");

    let user = users.find_by_id(1).unwrap();
    assert_eq!(user.created_at.to_string(), "2021-03-07T18:05:09");
}
