#![no_main]

use std::path::Path;

use actgen::domain::services::{synchronize, KeyRequest};
use actgen::infrastructure::TomlResourceRepository;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(store) = TomlResourceRepository::parse(content, Path::new("Resources.toml")) else {
        return;
    };

    let requests = [
        KeyRequest::new("EchoDisplayName", "myvalue").with_comment("activity name"),
        KeyRequest::new("EchoDescription", ""),
    ];
    let report = synchronize(&store, &requests);
    assert_eq!(&report.store.entries()[..store.len()], store.entries());

    let written = TomlResourceRepository::serialize(&report.store).unwrap();
    let reread = TomlResourceRepository::parse(&written, Path::new("Resources.toml")).unwrap();
    assert_eq!(reread, report.store);
});
