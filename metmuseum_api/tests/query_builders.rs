use chrono::NaiveDate;
use metmuseum_api::{ObjectsOptions, Query, SearchOptions};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/").unwrap()
}

fn decoded_pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[test]
fn objects_defaults_emit_nothing() {
    let url = ObjectsOptions::default().add_to_url(&base_url());
    assert_eq!(url.query(), None);
}

#[test]
fn objects_department_ids_join_with_pipe() {
    let options = ObjectsOptions::default().with_department_ids(&[1, 6]);
    assert_eq!(
        options.to_query_pairs(),
        vec![("departmentIds", "1|6".to_string())]
    );

    let url = options.add_to_url(&base_url());
    assert_eq!(
        decoded_pairs(&url),
        vec![("departmentIds".to_string(), "1|6".to_string())]
    );
}

#[test]
fn objects_metadata_date_uses_iso_day() {
    let url = ObjectsOptions::default()
        .with_metadata_date(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("metadataDate=2024-03-09"));
}

#[test]
fn search_q_is_always_emitted() {
    let url = SearchOptions::default().add_to_url(&base_url());
    assert_eq!(url.query(), Some("q="));

    let url = SearchOptions::new("sunflowers").add_to_url(&base_url());
    assert_eq!(url.query(), Some("q=sunflowers"));
}

#[test]
fn search_booleans_are_literal_and_unset_filters_are_absent() {
    let url = SearchOptions::new("sunflowers")
        .with_is_highlight(true)
        .with_has_images(false)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert_eq!(query, "q=sunflowers&isHighlight=true&hasImages=false");
    assert!(!query.contains("isOnView"));
    assert!(!query.contains("departmentId"));
    assert!(!query.contains("dateBegin"));
}

#[test]
fn search_lists_keep_order() {
    let options = SearchOptions::new("quilt")
        .with_media(&["Quilts".to_string(), "Silk".to_string()])
        .with_medium("Bedcovers")
        .with_geo_location("France")
        .with_geo_location("Paris");
    let pairs = options.to_query_pairs();
    assert!(pairs.contains(&("medium", "Quilts|Silk|Bedcovers".to_string())));
    assert!(pairs.contains(&("geoLocations", "France|Paris".to_string())));
}

#[test]
fn search_year_range_emits_both_bounds() {
    let options = SearchOptions::new("African")
        .with_department_id(5)
        .with_year_range(1700, 1800);
    let pairs = options.to_query_pairs();
    assert_eq!(
        pairs,
        vec![
            ("q", "African".to_string()),
            ("departmentId", "5".to_string()),
            ("dateBegin", "1700".to_string()),
            ("dateEnd", "1800".to_string()),
        ]
    );
    assert!(options.validate().is_ok());
}

#[test]
fn search_one_sided_year_range_is_invalid() {
    let options = SearchOptions {
        date_end: Some(1800),
        ..SearchOptions::new("African")
    };
    let err = options.validate().unwrap_err();
    assert!(matches!(err, metmuseum_api::Error::InvalidOptions(_)));
}

#[test]
fn search_query_text_is_percent_encoded() {
    let url = SearchOptions::new("Auguste Renoir & co").add_to_url(&base_url());
    assert_eq!(url.query(), Some("q=Auguste+Renoir+%26+co"));
    assert_eq!(
        decoded_pairs(&url),
        vec![("q".to_string(), "Auguste Renoir & co".to_string())]
    );
}
