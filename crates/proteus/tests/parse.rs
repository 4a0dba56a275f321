//! End-to-end binding tests against the full engine.

use std::collections::HashMap;

use proteus::{Error, Proteus, Record, Request};

#[derive(Clone, Debug, Default, PartialEq, Record)]
struct SearchRequest {
    #[proteus(query = "q", string = "trim,lower")]
    query: String,
    #[proteus(query = "page")]
    page: u32,
    #[proteus(query = "limit")]
    limit: Option<u32>,
    #[proteus(header = "x-request-id")]
    request_id: String,
    #[proteus(cookie = "session")]
    session: String,
    #[proteus(path = "collection")]
    collection: String,
    #[proteus(query = "tag")]
    tags: Vec<String>,
    note: String,
}

#[derive(Debug, Default, PartialEq, Record)]
struct CreateUser {
    #[proteus(header = "x-tenant")]
    tenant: String,
    name: String,
    age: u32,
}

fn engine() -> Proteus {
    Proteus::builder().build()
}

#[test]
fn test_binds_all_sources() {
    let request = Request::builder()
        .uri("/search?q=Rust&page=3&tag=a&tag=b".parse().unwrap())
        .header("x-request-id", "req-9")
        .header("cookie", "session=s-1")
        .path_param("collection", "books")
        .build();

    let mut search = SearchRequest::default();
    engine().parse(&request, &mut search).unwrap();

    assert_eq!(search.query, "rust");
    assert_eq!(search.page, 3);
    assert_eq!(search.request_id, "req-9");
    assert_eq!(search.session, "s-1");
    assert_eq!(search.collection, "books");
    assert_eq!(search.tags, vec!["a".to_owned(), "b".to_owned()]);
    assert_eq!(search.note, "");
}

#[test]
fn test_absent_sources_leave_fields_zeroed() {
    let request = Request::builder().uri("/search".parse().unwrap()).build();

    let mut search = SearchRequest::default();
    engine().parse(&request, &mut search).unwrap();

    assert_eq!(search, SearchRequest::default());
    assert_eq!(search.limit, None);
}

#[test]
fn test_option_allocated_on_extraction() {
    let request = Request::builder()
        .uri("/search?limit=25".parse().unwrap())
        .build();

    let mut search = SearchRequest::default();
    engine().parse(&request, &mut search).unwrap();

    assert_eq!(search.limit, Some(25));
}

#[test]
fn test_skip_filled_preserves_existing_values() {
    let request = Request::builder()
        .uri("/search?page=9".parse().unwrap())
        .build();

    let mut search = SearchRequest {
        page: 1,
        ..SearchRequest::default()
    };
    engine().parse(&request, &mut search).unwrap();
    assert_eq!(search.page, 1);

    let overwrite = Proteus::builder().skip_filled(false).build();
    overwrite.parse(&request, &mut search).unwrap();
    assert_eq!(search.page, 9);
}

#[test]
fn test_parse_is_idempotent() {
    let request = Request::builder()
        .uri("/search?q=rust&page=2".parse().unwrap())
        .build();
    let engine = engine();

    let mut first = SearchRequest::default();
    engine.parse(&request, &mut first).unwrap();

    let mut second = first.clone();
    engine.parse(&request, &mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_first_registered_parser_wins() {
    #[derive(Debug, Default, Record)]
    struct Ambiguous {
        #[proteus(query = "name", header = "x-name")]
        name: String,
    }

    let request = Request::builder()
        .uri("/who?name=from-query".parse().unwrap())
        .header("x-name", "from-header")
        .build();

    let mut record = Ambiguous::default();
    engine().parse(&request, &mut record).unwrap();

    // Query is registered before header; its value wins.
    assert_eq!(record.name, "from-query");
}

#[test]
fn test_header_fallback_when_query_absent() {
    #[derive(Debug, Default, Record)]
    struct Ambiguous {
        #[proteus(query = "name", header = "x-name")]
        name: String,
    }

    let request = Request::builder()
        .uri("/who".parse().unwrap())
        .header("x-name", "from-header")
        .build();

    let mut record = Ambiguous::default();
    engine().parse(&request, &mut record).unwrap();

    assert_eq!(record.name, "from-header");
}

#[test]
fn test_coercion_failure_reports_field_and_keyword() {
    let request = Request::builder()
        .uri("/search?page=banana".parse().unwrap())
        .build();

    let err = engine()
        .parse(&request, &mut SearchRequest::default())
        .unwrap_err();

    match &err {
        Error::SetField {
            value,
            field,
            keyword,
            target,
            ..
        } => {
            assert_eq!(value, "banana");
            assert_eq!(*field, "page");
            assert_eq!(*keyword, "query");
            assert_eq!(*target, "SearchRequest");
        }
        other => panic!("expected SetField, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "set `banana` into field `page` from tag `query` for `SearchRequest`"
    );
}

#[test]
fn test_json_body_merges_into_record() {
    let request = Request::builder()
        .method(http::Method::POST)
        .uri("/users".parse().unwrap())
        .header("content-type", "application/json; charset=utf-8")
        .header("x-tenant", "acme")
        .body(r#"{"name":"alice","age":30}"#)
        .build();

    let mut user = CreateUser::default();
    engine().parse(&request, &mut user).unwrap();

    assert_eq!(user.name, "alice");
    assert_eq!(user.age, 30);
    assert_eq!(user.tenant, "acme");
}

#[test]
fn test_body_subset_leaves_other_fields_untouched() {
    let request = Request::builder()
        .method(http::Method::POST)
        .uri("/users".parse().unwrap())
        .header("content-type", "application/json")
        .body(r#"{"age":41}"#)
        .build();

    let mut user = CreateUser {
        name: "existing".to_owned(),
        ..CreateUser::default()
    };
    engine().parse(&request, &mut user).unwrap();

    assert_eq!(user.name, "existing");
    assert_eq!(user.age, 41);
}

#[test]
fn test_form_body() {
    let request = Request::builder()
        .method(http::Method::POST)
        .uri("/users".parse().unwrap())
        .header("content-type", "application/x-www-form-urlencoded")
        .body("name=bob")
        .build();

    let mut user = CreateUser::default();
    engine().parse(&request, &mut user).unwrap();

    assert_eq!(user.name, "bob");
}

#[test]
fn test_body_skipped_for_get_requests() {
    let request = Request::builder()
        .uri("/users".parse().unwrap())
        .header("content-type", "application/json")
        .body(r#"{"name":"alice"}"#)
        .build();

    let mut user = CreateUser::default();
    engine().parse(&request, &mut user).unwrap();

    assert_eq!(user.name, "");
}

#[test]
fn test_unrecognized_content_type_is_silently_skipped() {
    let request = Request::builder()
        .method(http::Method::POST)
        .uri("/users".parse().unwrap())
        .header("content-type", "application/msgpack")
        .body(&b"\x81\xa1a\x01"[..])
        .build();

    let mut user = CreateUser::default();
    engine().parse(&request, &mut user).unwrap();

    assert_eq!(user, CreateUser::default());
}

#[test]
fn test_invalid_json_body_errors() {
    let request = Request::builder()
        .method(http::Method::POST)
        .uri("/users".parse().unwrap())
        .header("content-type", "application/json")
        .body("{truncated")
        .build();

    let err = engine()
        .parse(&request, &mut CreateUser::default())
        .unwrap_err();

    match &err {
        Error::Decode {
            content_type,
            target,
            ..
        } => {
            assert_eq!(content_type, "application/json");
            assert_eq!(*target, "CreateUser");
        }
        other => panic!("expected Decode, got {other:?}"),
    }
}

#[test]
fn test_no_body_record_rejects_documents() {
    #[derive(Debug, Default, Record)]
    #[proteus(no_body)]
    struct HeaderOnly {
        #[proteus(header = "x-request-id")]
        request_id: String,
    }

    let request = Request::builder()
        .method(http::Method::POST)
        .uri("/ping".parse().unwrap())
        .header("content-type", "application/json")
        .body("{}")
        .build();

    let err = engine()
        .parse(&request, &mut HeaderOnly::default())
        .unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_skip_field_is_invisible() {
    #[derive(Debug, Default, Record)]
    struct WithSecret {
        #[proteus(query = "q")]
        query: String,
        #[proteus(skip)]
        secret: String,
    }

    let request = Request::builder()
        .method(http::Method::POST)
        .uri("/search?q=rust".parse().unwrap())
        .header("content-type", "application/json")
        .body(r#"{"secret":"leaked"}"#)
        .build();

    let mut record = WithSecret::default();
    engine().parse(&request, &mut record).unwrap();

    assert_eq!(record.query, "rust");
    assert_eq!(record.secret, "");
}

#[test]
fn test_after_parse_hook_runs_last() {
    #[derive(Debug, Default, Record)]
    #[proteus(after_parse = "finalize")]
    struct Login {
        #[proteus(query = "user")]
        user: String,
    }

    impl Login {
        fn finalize(&mut self, _request: &Request) -> proteus::anyhow::Result<()> {
            if self.user.is_empty() {
                proteus::anyhow::bail!("user is required");
            }
            self.user = self.user.to_uppercase();
            Ok(())
        }
    }

    let request = Request::builder()
        .uri("/login?user=alice".parse().unwrap())
        .build();
    let mut login = Login::default();
    engine().parse(&request, &mut login).unwrap();
    assert_eq!(login.user, "ALICE");

    let missing = Request::builder().uri("/login".parse().unwrap()).build();
    let err = engine().parse(&missing, &mut Login::default()).unwrap_err();
    assert!(matches!(err, Error::AfterParse(_)));
}

#[test]
fn test_formatter_runs_even_when_no_source_matched() {
    // Formatters see every field that carries their keyword, not just
    // the ones a parser touched. For an Option that means the walk
    // allocates the default before formatting it.
    #[derive(Debug, Default, Record)]
    struct Opt {
        #[proteus(query = "name", string = "upper")]
        name: Option<String>,
        #[proteus(query = "nick")]
        nick: Option<String>,
    }

    let request = Request::builder().uri("/x".parse().unwrap()).build();
    let mut record = Opt::default();
    engine().parse(&request, &mut record).unwrap();
    assert_eq!(record.name, Some(String::new()));
    // No formatter keyword, so nothing takes the mutable view and the
    // Option stays unallocated.
    assert_eq!(record.nick, None);

    let present = Request::builder().uri("/x?name=ada".parse().unwrap()).build();
    engine().parse(&present, &mut record).unwrap();
    assert_eq!(record.name, Some("ADA".to_owned()));
}

#[test]
fn test_formatter_fills_default_for_absent_source() {
    struct DefaultFormatter;

    impl proteus::Formatter for DefaultFormatter {
        fn keyword(&self) -> &'static str {
            "default"
        }

        fn format(
            &self,
            tag: &proteus::Tag,
            field: proteus::FieldMut<'_>,
        ) -> proteus::anyhow::Result<()> {
            if let proteus::FieldMut::Str(slot) = field {
                if slot.is_empty() {
                    *slot = tag.get("default").unwrap_or_default().to_owned();
                }
            }
            Ok(())
        }
    }

    #[derive(Debug, Default, Record)]
    struct Prefs {
        #[proteus(query = "theme", default = "light")]
        theme: String,
    }

    let engine = Proteus::builder()
        .with_formatter(DefaultFormatter)
        .build();

    let absent = Request::builder().uri("/prefs".parse().unwrap()).build();
    let mut prefs = Prefs::default();
    engine.parse(&absent, &mut prefs).unwrap();
    assert_eq!(prefs.theme, "light");

    let present = Request::builder()
        .uri("/prefs?theme=dark".parse().unwrap())
        .build();
    let mut prefs = Prefs::default();
    engine.parse(&present, &mut prefs).unwrap();
    assert_eq!(prefs.theme, "dark");
}

#[test]
fn test_string_list_into_generic_any_keeps_collection_shape() {
    #[derive(Debug, Default, Record)]
    struct Generic {
        #[proteus(query = "tag")]
        tags: proteus::serde_json::Value,
    }

    let request = Request::builder()
        .uri("/x?tag=a&tag=b".parse().unwrap())
        .build();

    // The field already holds a string array, so the extracted list
    // replaces it rather than being joined.
    let mut record = Generic {
        tags: proteus::serde_json::json!([]),
    };
    let engine = Proteus::builder().skip_filled(false).build();
    engine.parse(&request, &mut record).unwrap();

    assert_eq!(record.tags, proteus::serde_json::json!(["a", "b"]));

    // A null any has no string-array shape to preserve; the pair is
    // unsupported.
    let err = engine.parse(&request, &mut Generic::default()).unwrap_err();
    assert!(matches!(err, Error::SetField { .. }));
}

#[test]
fn test_unknown_format_operation_aborts_the_walk() {
    #[derive(Debug, Default, Record)]
    struct BadFormat {
        #[proteus(query = "q", string = "sparkle")]
        query: String,
    }

    let request = Request::builder()
        .uri("/search?q=rust".parse().unwrap())
        .build();

    let err = engine()
        .parse(&request, &mut BadFormat::default())
        .unwrap_err();

    match &err {
        Error::FormatField { field, target, .. } => {
            assert_eq!(*field, "query");
            assert_eq!(*target, "BadFormat");
        }
        other => panic!("expected FormatField, got {other:?}"),
    }
}

#[test]
fn test_parse_dyn_nil_destination() {
    let request = Request::builder().uri("/".parse().unwrap()).build();
    let err = engine().parse_dyn(&request, None).unwrap_err();
    assert!(matches!(err, Error::NilValue));
    assert_eq!(err.to_string(), "nil destination record");
}

#[test]
fn test_parse_dyn_binds_through_trait_object() {
    let request = Request::builder()
        .uri("/search?q=dyn".parse().unwrap())
        .build();
    let mut search = SearchRequest::default();
    engine()
        .parse_dyn(&request, Some(&mut search))
        .unwrap();
    assert_eq!(search.query, "dyn");
}

#[test]
fn test_parse_body_into_map() {
    let request = Request::builder()
        .method(http::Method::POST)
        .uri("/raw".parse().unwrap())
        .header("content-type", "application/json")
        .body(r#"{"a":"1","b":"2"}"#)
        .build();

    let map: Option<HashMap<String, String>> = engine().parse_body(&request).unwrap();
    let map = map.unwrap();
    assert_eq!(map.get("a").map(String::as_str), Some("1"));
    assert_eq!(map.get("b").map(String::as_str), Some("2"));
}

#[test]
fn test_parse_body_skips_like_the_pipeline() {
    let request = Request::builder()
        .uri("/raw".parse().unwrap())
        .header("content-type", "application/json")
        .body(r#"{"a":1}"#)
        .build();

    let map: Option<HashMap<String, i64>> = engine().parse_body(&request).unwrap();
    assert_eq!(map, None);
}

#[test]
fn test_empty_registries_bind_nothing() {
    let request = Request::builder()
        .method(http::Method::POST)
        .uri("/search?q=rust".parse().unwrap())
        .header("content-type", "application/json")
        .body(r#"{"note":"hello"}"#)
        .build();

    let bare = proteus::ProteusBuilder::empty().build();
    let mut search = SearchRequest::default();
    bare.parse(&request, &mut search).unwrap();

    assert_eq!(search, SearchRequest::default());
}
