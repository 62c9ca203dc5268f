// tests/launch_args_property.rs

use proptest::prelude::*;
use vscode_test_launcher::launch::build_launch_args;
use vscode_test_launcher::types::ImplicitLaunch;

fn position(args: &[String], prefix: &str) -> Option<usize> {
    args.iter().position(|a| a.starts_with(prefix))
}

prop_compose! {
    fn implicit_launch()(
        ext in "[a-z/]{1,12}",
        tests in "[a-z/]{1,12}",
        workspace in proptest::option::of("[a-z/ ]{1,12}"),
        locale in proptest::option::of("[a-z]{2}"),
        extra in proptest::collection::vec("--[a-z-]{1,10}", 0..5),
    ) -> ImplicitLaunch {
        let mut launch = ImplicitLaunch::new(format!("/{ext}"), format!("/{tests}"));
        launch.test_workspace = workspace.map(|w| format!("/ws/{w}").into());
        launch.locale = locale;
        launch.additional_launch_args = extra;
        launch
    }
}

proptest! {
    #[test]
    fn core_flags_keep_relative_order(launch in implicit_launch()) {
        let args: Vec<String> = build_launch_args(&launch)
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        let dev = position(&args, "--extensionDevelopmentPath=").unwrap();
        let tests = position(&args, "--extensionTestsPath=").unwrap();
        let locale = position(&args, "--locale=").unwrap();
        prop_assert!(dev < tests && tests < locale);

        match &launch.test_workspace {
            Some(ws) => {
                prop_assert_eq!(&args[0], &ws.to_string_lossy().into_owned());
                prop_assert_eq!(dev, 1);
            }
            None => prop_assert_eq!(dev, 0),
        }

        let expected_locale = format!("--locale={}", launch.locale.as_deref().unwrap_or("en"));
        prop_assert_eq!(&args[locale], &expected_locale);

        prop_assert_eq!(&args[locale + 1..], &launch.additional_launch_args[..]);
    }
}
