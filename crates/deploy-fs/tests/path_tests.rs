use deploy_fs::NormalizedPath;
use rstest::rstest;

#[test]
fn test_normalize_backslashes_to_forward() {
    let path = NormalizedPath::new("C:\\inetpub\\Alloy\\Alloy.Web");
    assert_eq!(path.as_str(), "C:/inetpub/Alloy/Alloy.Web");
}

#[test]
fn test_join_paths() {
    let base = NormalizedPath::new("/src/Alloy");
    let joined = base.join("Alloy.Web");
    assert_eq!(joined.as_str(), "/src/Alloy/Alloy.Web");
}

#[test]
fn test_join_onto_trailing_slash() {
    let base = NormalizedPath::new("/src/Alloy/");
    assert_eq!(base.join("web.config").as_str(), "/src/Alloy/web.config");
}

#[rstest]
#[case("/src/Alloy.sln", Some("sln"))]
#[case("/src/Alloy.Web/Alloy.Web.csproj", Some("csproj"))]
#[case("/src/.vs", None)]
#[case("/src/README", None)]
fn test_extension(#[case] input: &str, #[case] expected: Option<&str>) {
    assert_eq!(NormalizedPath::new(input).extension(), expected);
}

#[test]
fn test_file_name_of_directory_with_trailing_slash() {
    let path = NormalizedPath::new("/src/Alloy.Web/");
    assert_eq!(path.file_name(), Some("Alloy.Web"));
}

#[test]
fn test_has_file_name_ignores_case() {
    let path = NormalizedPath::new("/src/Alloy.Web/Web.Config");
    assert!(path.has_file_name("web.config"));
    assert!(!path.has_file_name("episerver.config"));
}

#[test]
fn test_absolutize_keeps_absolute_path() {
    let path = NormalizedPath::absolutize("/srv/sites/alloy", "/home/build");
    assert_eq!(path.as_str(), "/srv/sites/alloy");
}

#[test]
fn test_absolutize_joins_relative_path_onto_base() {
    let path = NormalizedPath::absolutize("sites/alloy", "/home/build");
    assert_eq!(path.as_str(), "/home/build/sites/alloy");
}

#[test]
fn test_absolutize_empty_path_is_base() {
    let path = NormalizedPath::absolutize("", "/home/build");
    assert_eq!(path.as_str(), "/home/build");
}
