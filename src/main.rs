// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use record_processor::observability::init_logging;
use record_processor::record::Record;
use record_processor::traits::Processor;
use record_processor::utils::{first_or_zero, SampleValue};

const GREETING: &str = "Hello, Colorful Darcula!";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let numbers = vec![1, 2, 3, 4, 5];

    let mut record = Record::new("example");
    record.label = "updated".to_string();

    let data = record.identity();
    record
        .process(&data)
        .await
        .with_context(|| format!("processing '{}' failed", data))?;

    let value = SampleValue::from("string value");
    if let Some(text) = value.as_text() {
        println!("{}", text);
    }

    let first = first_or_zero(&numbers);

    // Any failure here ends the run; attempts only repeat inside `process`
    record
        .process("data")
        .await
        .context("processing 'data' failed")?;

    for (idx, num) in numbers.iter().enumerate() {
        println!(
            "Index: {}, Value: {}, First: {}, Record: {}",
            idx, num, first, record
        );
    }

    match GREETING {
        "Hello" => println!("Matched Hello"),
        _ => println!("Default case"),
    }

    Ok(())
}
