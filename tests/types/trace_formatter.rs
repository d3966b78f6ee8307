use resokerr::{Failure, MessageTrace, TraceFormatBuilder, TraceFormatConfig, TraceFormatter};

fn chain() -> MessageTrace {
    MessageTrace::error("write failed")
        .with_cause(MessageTrace::warning("disk 98% full").with_cause(MessageTrace::info("quota is 10GiB")))
}

#[test]
fn default_layout_is_single_line_with_severities() {
    assert_eq!(
        chain().to_string(),
        "[error] write failed -> [warning] disk 98% full -> [info] quota is 10GiB"
    );
}

#[test]
fn alternate_display_cascades() {
    assert_eq!(
        format!("{:#}", chain()),
        "[error] write failed\n  [warning] disk 98% full\n    [info] quota is 10GiB"
    );
}

#[test]
fn root_first_reverses_entries() {
    let trace = chain();
    let rendered = trace.fmt().root_first(true).show_severity(false).to_string();
    assert_eq!(rendered, "quota is 10GiB -> disk 98% full -> write failed");
}

#[test]
fn custom_separator() {
    let trace = chain();
    let rendered = trace.fmt().with_separator(" <- ").show_severity(false).to_string();
    assert_eq!(rendered, "write failed <- disk 98% full <- quota is 10GiB");
}

#[test]
fn compact_preset() {
    let trace = chain();
    assert_eq!(
        trace.fmt().compact().to_string(),
        "[error] write failed | [warning] disk 98% full | [info] quota is 10GiB"
    );
}

#[test]
fn headed_chain_puts_payload_first() {
    let failure = Failure::with_cause("disk full", chain());
    assert_eq!(
        failure.error_chain(),
        "disk full -> [error] write failed -> [warning] disk 98% full -> [info] quota is 10GiB"
    );
    assert_eq!(
        failure.fmt().root_first(true).show_severity(false).to_string(),
        "disk full -> quota is 10GiB -> disk 98% full -> write failed"
    );
}

#[test]
fn headed_chain_without_cause_is_just_the_payload() {
    let failure = Failure::new("timeout");
    assert_eq!(failure.to_string(), "timeout");
    assert_eq!(TraceFormatBuilder::headed(&"timeout", None).to_string(), "timeout");
}

#[test]
fn failure_alternate_display_cascades() {
    let failure = Failure::with_cause(404, MessageTrace::error("not found"));
    assert_eq!(format!("{failure:#}"), "404\n  [error] not found");
}

#[test]
fn format_with_customizes_builder() {
    let trace = chain();
    let rendered = trace.format_with(|fmt| fmt.with_config(TraceFormatConfig::no_severity()));
    assert_eq!(rendered, "write failed -> disk 98% full -> quota is 10GiB");
}

#[test]
fn config_presets_differ_from_default() {
    let default = TraceFormatConfig::default();
    assert_eq!(default.separator, " -> ");
    assert!(default.show_severity);
    assert!(TraceFormatConfig::cascaded().cascade);
    assert_eq!(TraceFormatConfig::compact().separator, " | ");
    assert!(!TraceFormatConfig::no_severity().show_severity);
}

#[test]
fn render_with_custom_formatter() {
    struct Numbered;

    impl TraceFormatter for Numbered {
        fn render(&self, labels: &[String]) -> String {
            labels
                .iter()
                .enumerate()
                .map(|(i, label)| format!("{}. {label}", i + 1))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }

    let failure = Failure::with_cause("disk full", chain());
    assert_eq!(
        failure.fmt().show_severity(false).render_with(&Numbered),
        "1. disk full\n2. write failed\n3. disk 98% full\n4. quota is 10GiB"
    );
}

#[test]
fn default_trait_render_joins_with_separator() {
    struct Slashes;

    impl TraceFormatter for Slashes {
        fn separator(&self) -> &str {
            " / "
        }
    }

    let trace = chain();
    assert_eq!(
        trace.fmt().root_first(true).render_with(&Slashes),
        "[info] quota is 10GiB / [warning] disk 98% full / [error] write failed"
    );
}

#[test]
fn labels_lists_head_then_entries() {
    let failure = Failure::with_cause(500, MessageTrace::info("retrying"));
    assert_eq!(failure.fmt().labels(), ["500", "[info] retrying"]);
}

#[test]
fn cascade_keeps_custom_separator() {
    let trace = chain();
    let rendered = trace.fmt().show_severity(false).with_separator(" <-\n").cascade(true).to_string();
    assert_eq!(rendered, "write failed <-\n  disk 98% full <-\n    quota is 10GiB");
}
