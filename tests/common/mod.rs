//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod pdf_server;

use lopdf::{dictionary, Document, Object};
use pdf_harvest::HarvestConfig;
use std::path::Path;

/// Build an in-memory PDF with `pages` blank A4 pages.
pub fn pdf_bytes(pages: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let kids: Vec<Object> = (0..pages)
        .map(|_| {
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(595),
                    Object::Integer(842),
                ],
            })
            .into()
        })
        .collect();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).expect("serialise test PDF");
    out
}

/// Config writing into `out`, with a proxy-free client so loopback
/// requests never leave the machine.
pub fn config_for(out: &Path) -> HarvestConfig {
    HarvestConfig::builder()
        .output_dir(out)
        .client(
            reqwest::Client::builder()
                .no_proxy()
                .build()
                .expect("build client"),
        )
        .build()
        .expect("valid config")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
