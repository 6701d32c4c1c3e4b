use sporlib::convert::{
    check_id, check_type, from_uri, from_url, to_uri, to_url, ConversionError, IdentifierType,
};

#[test]
fn test_uri_round_trip_for_all_types() {
    let id = "3RBULTZJ97bvVzZLpxcB0j";

    for kind in IdentifierType::ALL {
        let uri = to_uri(kind.as_str(), id).unwrap();

        // The URI carries the canonical type tag
        assert_eq!(uri, format!("spotify:{kind}:{id}"));

        // Parsing recovers exactly the original pair
        let (parsed_kind, parsed_id) = from_uri(&uri).unwrap();
        assert_eq!(parsed_kind, kind);
        assert_eq!(parsed_id, id);
    }
}

#[test]
fn test_url_round_trip_for_all_types() {
    let id = "3RBULTZJ97bvVzZLpxcB0j";

    for kind in IdentifierType::ALL {
        let url = to_url(kind.as_str(), id).unwrap();

        // Generation always emits the https prefix
        assert_eq!(url, format!("https://open.spotify.com/{kind}/{id}"));

        // Parsing recovers exactly the original pair
        let (parsed_kind, parsed_id) = from_url(&url).unwrap();
        assert_eq!(parsed_kind, kind);
        assert_eq!(parsed_id, id);
    }
}

#[test]
fn test_check_id() {
    // Plain base62 strings pass
    assert!(check_id("abc123XYZ").is_ok());
    assert!(check_id("3RBULTZJ97bvVzZLpxcB0j").is_ok());

    // The empty string is rejected explicitly
    assert_eq!(
        check_id(""),
        Err(ConversionError::InvalidId(String::new()))
    );

    // Hyphen is not part of the base62 alphabet
    assert_eq!(
        check_id("abc-123"),
        Err(ConversionError::InvalidId("abc-123".to_string()))
    );

    // Neither is whitespace or anything non-ASCII
    assert!(check_id("abc 123").is_err());
    assert!(check_id("abcé").is_err());
}

#[test]
fn test_check_type() {
    // Every canonical tag parses to its variant
    assert_eq!(check_type("album"), Ok(IdentifierType::Album));
    assert_eq!(check_type("track"), Ok(IdentifierType::Track));
    assert_eq!(check_type("episode"), Ok(IdentifierType::Episode));

    // Anything else is rejected
    assert_eq!(
        check_type("not_a_type"),
        Err(ConversionError::InvalidType("not_a_type".to_string()))
    );

    // Comparison is exact, no case folding
    assert!(check_type("Album").is_err());
}

#[test]
fn test_to_uri_and_to_url_exact_output() {
    let id = "3RBULTZJ97bvVzZLpxcB0j";

    assert_eq!(
        to_uri("album", id).unwrap(),
        "spotify:album:3RBULTZJ97bvVzZLpxcB0j"
    );
    assert_eq!(
        to_url("album", id).unwrap(),
        "https://open.spotify.com/album/3RBULTZJ97bvVzZLpxcB0j"
    );
}

#[test]
fn test_type_is_checked_before_id() {
    // Both fields invalid: the type error wins because it is checked first
    assert_eq!(
        to_uri("badtype", "bad id!"),
        Err(ConversionError::InvalidType("badtype".to_string()))
    );
    assert_eq!(
        to_url("badtype", "bad id!"),
        Err(ConversionError::InvalidType("badtype".to_string()))
    );

    // Valid type, invalid id: the id error surfaces
    assert_eq!(
        to_uri("album", "bad id!"),
        Err(ConversionError::InvalidId("bad id!".to_string()))
    );
}

#[test]
fn test_from_url_accepts_legacy_prefixes() {
    let expected = (IdentifierType::Album, "3RBULTZJ97bvVzZLpxcB0j".to_string());

    // https, http and the bare domain all parse to the same pair
    assert_eq!(
        from_url("https://open.spotify.com/album/3RBULTZJ97bvVzZLpxcB0j").unwrap(),
        expected
    );
    assert_eq!(
        from_url("http://open.spotify.com/album/3RBULTZJ97bvVzZLpxcB0j").unwrap(),
        expected
    );
    assert_eq!(
        from_url("open.spotify.com/album/3RBULTZJ97bvVzZLpxcB0j").unwrap(),
        expected
    );
}

#[test]
fn test_from_uri_invalid_inputs() {
    // Wrong segment count
    assert_eq!(
        from_uri("not:a:uri:with:extra:parts"),
        Err(ConversionError::MalformedUri(
            "not:a:uri:with:extra:parts".to_string()
        ))
    );
    assert!(from_uri("spotify:album").is_err());
    assert!(from_uri("justanid").is_err());

    // Wrong scheme
    assert_eq!(
        from_uri("spotfy:album:3RBULTZJ97bvVzZLpxcB0j"),
        Err(ConversionError::InvalidUriPrefix("spotfy".to_string()))
    );

    // Bad type and bad id inside an otherwise well-formed URI
    assert_eq!(
        from_uri("spotify:badtype:123"),
        Err(ConversionError::InvalidType("badtype".to_string()))
    );
    assert_eq!(
        from_uri("spotify:album:"),
        Err(ConversionError::InvalidId(String::new()))
    );
}

#[test]
fn test_from_url_invalid_inputs() {
    // Unrelated domain
    assert_eq!(
        from_url("https://example.com/album/3RBULTZJ97bvVzZLpxcB0j"),
        Err(ConversionError::InvalidUrlPrefix(
            "https://example.com".to_string()
        ))
    );

    // Missing prefix entirely
    assert_eq!(
        from_url("album/3RBULTZJ97bvVzZLpxcB0j"),
        Err(ConversionError::InvalidUrlPrefix(String::new()))
    );

    // Too few segments to hold a type and an id
    assert_eq!(
        from_url("justanid"),
        Err(ConversionError::MalformedUrl("justanid".to_string()))
    );

    // Bad type inside an accepted prefix
    assert_eq!(
        from_url("https://open.spotify.com/badtype/123"),
        Err(ConversionError::InvalidType("badtype".to_string()))
    );
}

#[test]
fn test_identifier_type_display_and_serde() {
    // Display emits the canonical lowercase tag
    assert_eq!(IdentifierType::Album.to_string(), "album");
    assert_eq!(IdentifierType::Playlist.to_string(), "playlist");
    assert_eq!(IdentifierType::Show.to_string(), "show");

    // Serde round-trips through the same tag
    let json = serde_json::to_string(&IdentifierType::Track).unwrap();
    assert_eq!(json, "\"track\"");
    let parsed: IdentifierType = serde_json::from_str("\"artist\"").unwrap();
    assert_eq!(parsed, IdentifierType::Artist);
}
