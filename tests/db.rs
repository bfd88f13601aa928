use advocates_directory::db::establish_connection_pool;
use diesel::connection::SimpleConnection;

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new("test_in_memory_connection.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}

#[test]
fn test_default_pool_is_read_only() {
    let test_db = common::TestDb::new("test_default_pool_is_read_only.db");
    let pool = establish_connection_pool(test_db.url()).unwrap();
    let mut conn = pool.get().unwrap();

    let result = conn.batch_execute(
        "INSERT INTO advocates (first_name, last_name, city, degree, years_of_experience, phone_number) \
         VALUES ('A', 'B', 'C', 'MD', 1, 5550000000);",
    );

    assert!(result.is_err());
}
