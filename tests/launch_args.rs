// tests/launch_args.rs

use std::ffi::OsString;

use vscode_test_launcher::launch::{build_launch_args, launch_args_for};
use vscode_test_launcher_test_utils::builders::{ExplicitLaunchBuilder, ImplicitLaunchBuilder};

fn strings(args: Vec<OsString>) -> Vec<String> {
    args.into_iter()
        .map(|a| a.into_string().expect("test args are UTF-8"))
        .collect()
}

#[test]
fn implicit_args_use_fixed_order_with_default_locale() {
    let launch = ImplicitLaunchBuilder::new("/ext", "/ext/out/test/index").build_launch();

    assert_eq!(
        strings(build_launch_args(&launch)),
        vec![
            "--extensionDevelopmentPath=/ext",
            "--extensionTestsPath=/ext/out/test/index",
            "--locale=en",
        ]
    );
}

#[test]
fn workspace_comes_first_and_extra_args_last() {
    let launch = ImplicitLaunchBuilder::new("/ext", "/ext/tests")
        .workspace("/fixtures/ws")
        .locale("de")
        .arg("--disable-extensions")
        .arg("--user-data-dir=/tmp/ud")
        .build_launch();

    assert_eq!(
        strings(build_launch_args(&launch)),
        vec![
            "/fixtures/ws",
            "--extensionDevelopmentPath=/ext",
            "--extensionTestsPath=/ext/tests",
            "--locale=de",
            "--disable-extensions",
            "--user-data-dir=/tmp/ud",
        ]
    );
}

#[test]
fn paths_with_spaces_stay_single_arguments() {
    let launch = ImplicitLaunchBuilder::new("/my ext", "/my ext/test suite")
        .workspace("/a folder; rm -rf /")
        .build_launch();

    let args = strings(build_launch_args(&launch));
    assert_eq!(args.len(), 4);
    assert_eq!(args[0], "/a folder; rm -rf /");
    assert_eq!(args[1], "--extensionDevelopmentPath=/my ext");
    assert_eq!(args[2], "--extensionTestsPath=/my ext/test suite");
}

#[test]
fn explicit_args_pass_through_verbatim() {
    let request = ExplicitLaunchBuilder::new(["--foo", "bar baz", "--locale=fr"]).build();

    assert_eq!(
        strings(launch_args_for(&request)),
        vec!["--foo", "bar baz", "--locale=fr"]
    );
}

#[test]
fn explicit_args_get_no_injected_flags() {
    let request = ExplicitLaunchBuilder::new(Vec::<String>::new()).build();
    assert!(launch_args_for(&request).is_empty());
}
