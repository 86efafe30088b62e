//! Integration tests for the rtags daemon client.
//!
//! These run the client against a fake `rc` executable, so the full
//! spawn / timeout / exit-code / parse path is exercised with real
//! processes and no live daemon.

mod common;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serial_test::serial;
use tokio_test::assert_ok;

use common::FakeRc;
use rtags_bridge::error::RtagsError;
use rtags_bridge::rtags::Position;

fn cursor() -> Position {
    Position::new("/src/main.cpp", 10, 4)
}

#[tokio::test]
async fn find_references_parses_locations_in_order() {
    let rc = FakeRc::with_output(
        "/src/foo.cpp:42:9:\tint foo();\n/src/bar.cpp:7:13:\tfoo();\n/src/baz.cpp:1:1:\n",
    );
    let locations = rc.client().find_references(&cursor()).await.unwrap();

    assert_eq!(locations.len(), 3);
    assert_eq!(locations[0].position, Position::new("/src/foo.cpp", 42, 9));
    assert_eq!(locations[0].context.as_deref(), Some("int foo();"));
    assert_eq!(locations[1].position, Position::new("/src/bar.cpp", 7, 13));
    assert_eq!(locations[2].position, Position::new("/src/baz.cpp", 1, 1));
    assert_eq!(locations[2].context, None);
}

#[tokio::test]
async fn follow_location_empty_output_is_empty_result_not_error() {
    let rc = FakeRc::empty();
    let locations = assert_ok!(rc.client().follow_location(&cursor()).await);
    assert!(locations.is_empty());
}

#[tokio::test]
async fn nonzero_exit_is_query_failed() {
    let rc = FakeRc::failing(1, "Cant seem to connect to server");
    let err = rc.client().find_references(&cursor()).await.unwrap_err();
    match err {
        RtagsError::QueryFailed { code, stderr } => {
            assert_eq!(code, 1);
            assert!(stderr.contains("connect to server"));
        }
        other => panic!("expected QueryFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_location_output_is_malformed() {
    let rc = FakeRc::with_output("this is not a location line\n");
    let err = rc.client().follow_location(&cursor()).await.unwrap_err();
    assert!(matches!(err, RtagsError::MalformedOutput(_)));
}

#[tokio::test]
#[serial]
async fn hanging_daemon_times_out() {
    let rc = FakeRc::hanging();
    let client = rc.client_with_timeout(Duration::from_millis(200));
    let err = client.find_references(&cursor()).await.unwrap_err();
    assert!(matches!(err, RtagsError::Timeout(_)));
}

#[tokio::test]
async fn symbol_info_returns_lines() {
    let rc = FakeRc::with_output("SymbolName: foo\nKind: FunctionDecl\nType: int ()\n");
    let lines = rc.client().symbol_info(&cursor()).await.unwrap();
    assert_eq!(
        lines,
        vec!["SymbolName: foo", "Kind: FunctionDecl", "Type: int ()"]
    );
}

#[tokio::test]
async fn symbol_info_empty_output_is_empty_list() {
    let rc = FakeRc::empty();
    let lines = rc.client().symbol_info(&cursor()).await.unwrap();
    assert!(lines.is_empty());
}

#[tokio::test]
async fn include_file_trims_trailing_newline() {
    let rc = FakeRc::with_output("#include <vector>\n");
    let result = rc
        .client()
        .include_file(Path::new("/src/main.cpp"), "vector")
        .await
        .unwrap();
    assert_eq!(result, "#include <vector>");
}

#[tokio::test]
async fn include_file_empty_answer_is_empty_string() {
    let rc = FakeRc::empty();
    let result = rc
        .client()
        .include_file(Path::new("/src/main.cpp"), "nosuchsymbol")
        .await
        .unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn dependencies_passes_filter_through_unvalidated() {
    let rc = FakeRc::echoing_args();
    let output = rc
        .client()
        .dependencies(Path::new("/src/main.cpp"), "bogus-filter")
        .await
        .unwrap();
    assert_eq!(output, "--dependencies /src/main.cpp bogus-filter");
}

#[tokio::test]
async fn dependencies_without_filter_omits_the_argument() {
    let rc = FakeRc::echoing_args();
    let output = rc
        .client()
        .dependencies(Path::new("/src/main.cpp"), "")
        .await
        .unwrap();
    assert_eq!(output, "--dependencies /src/main.cpp");
}

#[tokio::test]
async fn extra_rc_args_are_prepended() {
    let rc = FakeRc::echoing_args();
    let client = rtags_bridge::rtags::RtagsClient::builder()
        .rc_command(rc.command())
        .rc_args(["--socket-file", "/tmp/rdm.socket"])
        .build();
    let output = client
        .dependencies(Path::new("/src/main.cpp"), "")
        .await
        .unwrap();
    assert_eq!(
        output,
        "--socket-file /tmp/rdm.socket --dependencies /src/main.cpp"
    );
}

#[tokio::test]
async fn find_virtuals_queries_with_virtuals_flag() {
    let rc = FakeRc::echoing_args();
    // The echoed query is not location-shaped, so parsing rejects it;
    // what matters here is that it fails as MalformedOutput (the query
    // reached the daemon) rather than never being issued.
    let err = rc.client().find_virtuals(&cursor()).await.unwrap_err();
    match err {
        RtagsError::MalformedOutput(line) => {
            assert!(line.contains("--references"));
            assert!(line.contains("--find-virtuals"));
            assert!(line.contains("/src/main.cpp:10:4"));
        }
        other => panic!("expected MalformedOutput, got {other:?}"),
    }
}

#[tokio::test]
async fn preprocess_returns_raw_text() {
    let rc = FakeRc::with_output("# 1 \"/src/main.cpp\"\nint main() { return 0; }\n");
    let text = rc
        .client()
        .preprocess_file(&PathBuf::from("/src/main.cpp"))
        .await
        .unwrap();
    assert!(text.contains("int main()"));
}
