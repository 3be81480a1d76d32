use super::*;
use crate::probe::fake::FakeProbe;

#[test]
fn test_linux_and_windows_defaults_are_bare_commands() {
    let table = DefaultPathTable::detect(&FakeProbe::new());
    assert_eq!(table.lookup("IDEA", Platform::Linux), Some("idea"));
    assert_eq!(table.lookup("Android Studio", Platform::Windows), Some("studio"));
    assert_eq!(table.lookup("Rider", Platform::Linux), Some("rider"));
}

#[test]
fn test_mac_default_is_bare_command_without_bundle() {
    let table = DefaultPathTable::detect(&FakeProbe::new());
    assert_eq!(table.lookup("GoLand", Platform::MacOs), Some("goland"));
    assert_eq!(table.lookup("Android Studio", Platform::MacOs), Some("studio"));
}

#[test]
fn test_mac_default_prefers_first_candidate_in_system_applications() {
    let probe = FakeProbe::new()
        .with_file("/Applications/IntelliJ IDEA CE.app")
        .with_file("/Applications/IntelliJ IDEA Ultimate.app");
    let table = DefaultPathTable::detect(&probe);
    assert_eq!(
        table.lookup("IDEA", Platform::MacOs),
        Some("/Applications/IntelliJ IDEA Ultimate.app")
    );
}

#[test]
fn test_mac_default_falls_back_to_user_applications() {
    let probe = FakeProbe::new().with_file("/home/dev/Applications/PyCharm CE.app");
    let table = DefaultPathTable::detect(&probe);
    assert_eq!(
        table.lookup("PyCharm", Platform::MacOs),
        Some("/home/dev/Applications/PyCharm CE.app")
    );
}

#[test]
fn test_unknown_id_has_no_default() {
    let table = DefaultPathTable::detect(&FakeProbe::new());
    assert_eq!(table.lookup("Fleet", Platform::Linux), None);
}

#[test]
fn test_ensure_xcode_only_on_macos_and_only_once() {
    let mut table = DefaultPathTable::detect(&FakeProbe::new());
    assert!(!table.ensure_xcode(Platform::Linux));
    assert!(!table.contains(XCODE_ID));

    assert!(table.ensure_xcode(Platform::MacOs));
    assert!(!table.ensure_xcode(Platform::MacOs));
    assert_eq!(table.lookup(XCODE_ID, Platform::MacOs), Some(XCODE_BUNDLE));
    assert_eq!(table.lookup(XCODE_ID, Platform::Linux), None);
}

#[test]
fn test_platform_paths_treat_blank_as_unset() {
    let mut paths = PlatformPaths::default();
    paths.set(Platform::Linux, Some("   ".into()));
    assert_eq!(paths.get(Platform::Linux), None);

    paths.linux = Some(String::new());
    assert_eq!(paths.get(Platform::Linux), None);

    paths.set(Platform::Linux, Some("/opt/idea/bin/idea.sh".into()));
    assert_eq!(paths.get(Platform::Linux), Some("/opt/idea/bin/idea.sh"));
}

#[test]
fn test_label_falls_back_to_id() {
    let mut ide = IdeDescriptor::builtin("GoLand");
    assert_eq!(ide.label(), "GoLand");
    ide.display_name = "GoLand 2024".into();
    assert_eq!(ide.label(), "GoLand 2024");
}

#[test]
fn test_custom_descriptor_sets_only_its_platform() {
    let ide = IdeDescriptor::custom("Fleet", Platform::Linux, "/opt/fleet/bin/fleet");
    assert!(ide.is_custom);
    assert_eq!(ide.override_for(Platform::Linux), Some("/opt/fleet/bin/fleet"));
    assert_eq!(ide.override_for(Platform::MacOs), None);
}

#[test]
fn test_is_xcode_ignores_case() {
    assert!(IdeDescriptor::builtin("xcode").is_xcode());
    assert!(!IdeDescriptor::builtin("IDEA").is_xcode());
}
