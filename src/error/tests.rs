use crate::error::format::format_error_with_color;
use crate::error::*;

#[test]
fn test_error_context_invalid_arch() {
    let error = ApkFileError::InvalidArch("bogus".to_string());
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.is_some());
    let suggestion = context.suggestion.unwrap();
    assert!(suggestion.contains("x86_64"));
    assert!(suggestion.contains("mips64"));
    assert!(context.details.is_none());
}

#[test]
fn test_error_context_invalid_repo() {
    let error = ApkFileError::InvalidRepo("extra".to_string());
    let context = ErrorContext::new(&error);

    let suggestion = context.suggestion.unwrap();
    assert!(suggestion.contains("main, community, testing"));
}

#[test]
fn test_error_context_http_status() {
    let error = ApkFileError::HttpStatus {
        url: "https://pkgs.alpinelinux.org/contents?file=bash".to_string(),
        status: 503,
    };
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.unwrap().contains("try again later"));
    assert!(context.details.unwrap().contains("file=bash"));
}

#[test]
fn test_error_context_client_status_has_no_suggestion() {
    let error = ApkFileError::HttpStatus {
        url: "https://pkgs.alpinelinux.org/contents".to_string(),
        status: 404,
    };
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.is_none());
    assert!(context.details.is_some());
}

#[test]
fn test_error_messages_name_the_value() {
    assert_eq!(
        ApkFileError::InvalidArch("bogus".to_string()).to_string(),
        "bogus is not a valid arch"
    );
    assert_eq!(
        ApkFileError::InvalidRepo("extra".to_string()).to_string(),
        "extra is not a valid repo"
    );
}

#[test]
fn test_format_error_with_details_and_suggestion() {
    let error = ApkFileError::HttpStatus {
        url: "https://pkgs.alpinelinux.org/contents?file=bash".to_string(),
        status: 503,
    };
    let formatted = format_error_with_color(&error, false);

    assert!(formatted.starts_with("Error: requesting https://pkgs.alpinelinux.org/contents"));
    assert!(formatted.contains("\nRequest URL: https://pkgs.alpinelinux.org/contents?file=bash\n"));
    assert!(formatted.contains("\nSuggestions:\n• The contents search service"));
}

#[test]
fn test_error_context_invalid_encoding() {
    let error = ApkFileError::InvalidEncoding {
        url: "https://pkgs.alpinelinux.org/contents?file=bash".to_string(),
        source: String::from_utf8(vec![0xff, 0xfe]).unwrap_err(),
    };
    let context = ErrorContext::new(&error);

    assert!(error.to_string().contains("is not valid UTF-8"));
    assert!(context.details.unwrap().contains("file=bash"));
    assert_eq!(get_exit_code(&error), 1);
}

#[test]
fn test_format_error_with_color() {
    let error = ApkFileError::MissingFile;

    let plain = format_error_with_color(&error, false);
    assert!(plain.starts_with("Error: must pass a file to search for"));
    assert!(plain.contains("• Pass a file name or path"));
    assert!(!plain.contains("\x1b["));

    let colored = format_error_with_color(&error, true);
    assert!(colored.contains("\x1b[31m"));
    assert!(colored.ends_with("\x1b[0m"));
}

#[test]
fn test_exit_codes() {
    assert_eq!(
        get_exit_code(&ApkFileError::InvalidArch("bogus".to_string())),
        2
    );
    assert_eq!(
        get_exit_code(&ApkFileError::InvalidRepo("bogus".to_string())),
        2
    );
    assert_eq!(get_exit_code(&ApkFileError::MissingFile), 2);
    assert_eq!(
        get_exit_code(&ApkFileError::HttpStatus {
            url: "https://example.com".to_string(),
            status: 500,
        }),
        20
    );
    assert_eq!(
        get_exit_code(&ApkFileError::Document("bad selector".to_string())),
        1
    );
}
