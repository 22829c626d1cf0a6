use tabula_core::{ListOptions, Value};

#[test]
fn test_reference_query_shape() {
    let opts = ListOptions::for_table("users")
        .where_eq("id", 5)
        .order_by("name", "desc")
        .limit(10)
        .offset(20);

    let (q, args) = opts.build_query();
    assert_eq!(
        q,
        "SELECT * FROM users WHERE id = ? ORDER BY name DESC LIMIT 10 OFFSET 20"
    );
    assert_eq!(args, vec![Value::Int(5)]);
}

#[test]
fn test_from_query_pairs_reads_known_keys() {
    let opts = ListOptions::from_query_pairs([
        ("offset", "20"),
        ("limit", "10"),
        ("order", "desc"),
        ("by", "price"),
        ("color", "red"),
    ]);

    assert_eq!(opts.offset, 20);
    assert_eq!(opts.limit, 10);
    assert_eq!(opts.order, "desc");
    assert_eq!(opts.order_by_column, "price");
    assert!(opts.table.is_empty());
    assert!(opts.where_value.is_none());
}

#[test]
fn test_from_query_pairs_bad_numbers_become_zero() {
    let opts = ListOptions::from_query_pairs([("offset", "-1"), ("limit", "ten")]);
    assert_eq!(opts.offset, 0);
    assert_eq!(opts.limit, 0);
}

#[test]
fn test_from_query_pairs_signed_numbers_become_zero() {
    let opts = ListOptions::from_query_pairs([("limit", "+5"), ("offset", "+7")]);
    assert_eq!(opts.limit, 0);
    assert_eq!(opts.offset, 0);

    let opts = ListOptions::from_query_str("limit=%2B5&offset=%207");
    assert_eq!(opts.limit, 0);
    assert_eq!(opts.offset, 0);

    let opts = ListOptions::from_query_pairs([("limit", "5"), ("offset", "007")]);
    assert_eq!(opts.limit, 5);
    assert_eq!(opts.offset, 7);
}

#[test]
fn test_from_query_pairs_first_value_wins() {
    let opts = ListOptions::from_query_pairs(vec![
        ("limit".to_string(), "5".to_string()),
        ("limit".to_string(), "50".to_string()),
    ]);
    assert_eq!(opts.limit, 5);
}

#[test]
fn test_from_query_str_decodes_and_keeps_order_verbatim() {
    let mut opts = ListOptions::from_query_str("?limit=3&order=Descending&by=created%5Fat");

    assert_eq!(opts.limit, 3);
    assert_eq!(opts.order, "Descending");
    assert_eq!(opts.order_by_column, "created_at");

    opts.table = "events".to_string();
    assert_eq!(
        opts.build_query().0,
        "SELECT * FROM events ORDER BY created_at DESC LIMIT 3"
    );
}

#[test]
fn test_from_query_str_empty() {
    assert_eq!(ListOptions::from_query_str(""), ListOptions::default());
}
