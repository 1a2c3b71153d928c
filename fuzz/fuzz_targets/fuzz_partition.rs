#![no_main]

use actgen::domain::services::{is_marker, parse_invocation, TemplateRenderer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let tokens: Vec<&str> = text.split_whitespace().collect();

    if let Ok(invocation) = parse_invocation(&tokens) {
        assert!(invocation.groups.inputs.iter().all(|t| !is_marker(t)));
        assert!(invocation.groups.outputs.iter().all(|t| !is_marker(t)));

        // Rendering any parsed class must not panic
        let _ = TemplateRenderer::default().render(&invocation.class_spec());
    }
});
