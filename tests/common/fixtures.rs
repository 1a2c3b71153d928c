//! Test fixtures - reusable store content constants for tests.

/// A store with one translated class key and one unrelated entry
pub const TRANSLATED_STORE: &str = r#"[[entry]]
key = "EchoDisplayName"
value = "Echo"
comment = "activity name"

[[entry]]
key = "Unrelated"
value = "keep me"
"#;

/// A store whose only entry has a blank value
pub const BLANK_STORE: &str = r#"[[entry]]
key = "EchoDescription"
value = ""
"#;

/// A designer-style ResX document with one translated class key
pub const RESX_STORE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<root>
  <!-- Microsoft ResX Schema, Version 2.0 -->
  <resheader name="resmimetype">
    <value>text/microsoft-resx</value>
  </resheader>
  <resheader name="version">
    <value>2.0</value>
  </resheader>
  <data name="EchoDisplayName" xml:space="preserve">
    <value>Echo</value>
    <comment>activity name</comment>
  </data>
  <data name="Unrelated" xml:space="preserve">
    <value>keep me</value>
  </data>
</root>
"#;
