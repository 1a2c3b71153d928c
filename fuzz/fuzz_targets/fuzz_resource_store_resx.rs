#![no_main]

use std::path::Path;

use actgen::domain::services::{synchronize, KeyRequest};
use actgen::infrastructure::ResxResourceRepository;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let path = Path::new("Resources.resx");
    let Ok(store) = ResxResourceRepository::parse(content, path) else {
        return;
    };

    let requests = [KeyRequest::new("EchoDisplayName", "myvalue").with_comment("activity name")];
    let report = synchronize(&store, &requests);

    let written = ResxResourceRepository::render(Some(content), &report.store, path).unwrap();
    let reread = ResxResourceRepository::parse(&written, path).unwrap();
    assert_eq!(reread, report.store);
});
