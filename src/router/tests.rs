#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::{PatternError, RouteParams, RoutePattern, RouteTable, Segment};

fn table() -> RouteTable<&'static str> {
    RouteTable::builder()
        .route("", "dashboard")
        .unwrap()
        .route("doctors", "doctorSearch")
        .unwrap()
        .route("doctors/:doctorID/:page", "doctor")
        .unwrap()
        .route_with_defaults(
            "pathways",
            "pathways",
            RouteParams::new().with("page", "list"),
        )
        .unwrap()
        .route("pathways/:page", "pathways")
        .unwrap()
        .route("pathways/:page/:pathwayID", "pathways")
        .unwrap()
        .build()
}

#[test]
fn test_root_path() {
    let pattern = RoutePattern::parse("").unwrap();
    assert!(pattern.is_empty());
    assert!(pattern.match_segments(&[]).unwrap().is_empty());
}

#[test]
fn test_parse_segments() {
    let pattern = RoutePattern::parse("/doctors/:doctorID/:page/").unwrap();
    assert_eq!(pattern.as_str(), "doctors/:doctorID/:page");
    assert_eq!(pattern.len(), 3);
    assert_eq!(pattern.segments()[0], Segment::Literal("doctors".into()));
    assert!(pattern.segments()[1].is_param());
    assert_eq!(
        pattern.param_names().collect::<Vec<_>>(),
        vec!["doctorID", "page"]
    );
}

#[test]
fn test_parse_rejects_bad_patterns() {
    assert!(matches!(
        RoutePattern::parse("a//b"),
        Err(PatternError::EmptySegment { .. })
    ));
    assert!(matches!(
        RoutePattern::parse("a/:"),
        Err(PatternError::InvalidParamName { .. })
    ));
    assert!(matches!(
        RoutePattern::parse("a/:1st"),
        Err(PatternError::InvalidParamName { .. })
    ));
    assert!(matches!(
        RoutePattern::parse("a/:id/b/:id"),
        Err(PatternError::DuplicateParam { .. })
    ));
}

#[test]
fn test_literal_routes_have_no_params() {
    let table = table();
    for (path, screen) in [("", "dashboard"), ("doctors", "doctorSearch")] {
        let m = table.match_path(path).unwrap();
        assert_eq!(*m.screen(), screen);
        assert!(m.params.is_empty());
    }
}

#[test]
fn test_parameterized_path() {
    let m = table().match_path("doctors/42/profile").unwrap();
    assert_eq!(*m.screen(), "doctor");
    assert_eq!(m.get_param("doctorID"), Some("42"));
    assert_eq!(m.get_param("page"), Some("profile"));
    assert_eq!(m.params.len(), 2);
    assert_eq!(m.pattern(), "doctors/:doctorID/:page");
}

#[test]
fn test_literal_is_case_sensitive() {
    assert!(table().match_path("Doctors").is_none());
}

#[test]
fn test_segment_count_must_match() {
    let table = table();
    assert!(table.match_path("doctors/42").is_none());
    assert!(table.match_path("doctors/42/profile/extra").is_none());
}

#[test]
fn test_empty_segment_never_binds_param() {
    assert!(table().match_path("doctors//profile").is_none());
}

#[test]
fn test_param_values_are_percent_decoded() {
    let m = table().match_path("doctors/a%20b/profile").unwrap();
    assert_eq!(m.get_param("doctorID"), Some("a b"));
}

#[test]
fn test_invalid_percent_encoding_is_no_match() {
    // %FF is not valid UTF-8 on its own
    assert!(table().match_path("doctors/%FF/profile").is_none());
}

#[test]
fn test_defaults_and_overrides() {
    let table = table();
    let m = table.match_path("pathways").unwrap();
    assert_eq!(m.get_param("page"), Some("list"));

    let m = table.match_path("pathways/edit").unwrap();
    assert_eq!(m.get_param("page"), Some("edit"));

    let m = table.match_path("pathways/edit/9").unwrap();
    assert_eq!(m.get_param("pathwayID"), Some("9"));
}

#[test]
fn test_first_registered_wins() {
    let literal_first = RouteTable::builder()
        .route("guides/new", "newGuide")
        .unwrap()
        .route("guides/:page", "guides")
        .unwrap()
        .build();
    assert_eq!(*literal_first.match_path("guides/new").unwrap().screen(), "newGuide");
    assert_eq!(*literal_first.match_path("guides/rx").unwrap().screen(), "guides");

    let param_first = RouteTable::builder()
        .route("guides/:page", "guides")
        .unwrap()
        .route("guides/new", "newGuide")
        .unwrap()
        .build();
    let m = param_first.match_path("guides/new").unwrap();
    assert_eq!(*m.screen(), "guides");
    assert_eq!(m.get_param("page"), Some("new"));
}

#[test]
fn test_reverse() {
    let table = table();
    assert_eq!(table.reverse(&"dashboard", &RouteParams::new()), Some(String::new()));
    assert_eq!(
        table.reverse(
            &"doctor",
            &RouteParams::new().with("doctorID", "7").with("page", "profile")
        ),
        Some("doctors/7/profile".to_string())
    );
    assert_eq!(
        table.reverse(&"pathways", &RouteParams::new().with("page", "list")),
        Some("pathways".to_string())
    );
    assert_eq!(
        table.reverse(&"pathways", &RouteParams::new().with("page", "edit")),
        Some("pathways/edit".to_string())
    );
    assert_eq!(
        table.reverse(
            &"pathways",
            &RouteParams::new().with("page", "edit").with("pathwayID", "a b")
        ),
        Some("pathways/edit/a%20b".to_string())
    );
    assert_eq!(table.reverse(&"doctor", &RouteParams::new()), None);
}

#[test]
fn test_params_equality_ignores_order() {
    let a = RouteParams::new().with("a", "1").with("b", "2");
    let b = RouteParams::new().with("b", "2").with("a", "1");
    assert_eq!(a, b);
    assert_ne!(a, RouteParams::new().with("a", "1"));
}

#[test]
fn test_params_insert_overwrites() {
    let mut p = RouteParams::new().with("page", "list");
    p.insert("page", "edit");
    assert_eq!(p.len(), 1);
    assert_eq!(p.get("page"), Some("edit"));
}

#[test]
fn test_query_round_trip() {
    let p = RouteParams::from_query("q=ibu+profen&empty=&=skipped");
    assert_eq!(p.get("q"), Some("ibu profen"));
    assert_eq!(p.get("empty"), Some(""));
    assert_eq!(p.len(), 2);
    assert_eq!(RouteParams::from_query(&p.to_query()), p);
}
