/*
Copyright (c) 2021 VMware, Inc.
SPDX-License-Identifier: MIT
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use anyhow::Result;

use bfrt2rs::bfrt_to_rust;

use clap::{App, Arg};

use std::env;

use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    const BFRT_ARG: &str = "INPUT.BFRT.JSON";
    const OUTPUT_ARG: &str = "OUTPUT.RS";
    const NON_P4_ARG: &str = "non-p4";
    const PIPELINE_ARG: &str = "pipeline";
    const LIST_ARG: &str = "list";
    let matches = App::new("bfrt2rs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Outputs typed key and data constructors for BF-Runtime tables")
        .arg(
            Arg::with_name(BFRT_ARG)
                .help("bf-rt.json file describing the P4 tables")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name(OUTPUT_ARG)
                .help(".rs output file (stdout, by default)")
                .required(false)
                .index(2),
        )
        .arg(
            Arg::with_name(NON_P4_ARG)
                .help("bf-rt.json file describing the fixed-function tables")
                .value_name("NON_P4.JSON")
                .takes_value(true)
                .short("n"),
        )
        .arg(
            Arg::with_name(PIPELINE_ARG)
                .help("name of pipeline to convert (all pipelines, by default)")
                .value_name("PIPELINE")
                .takes_value(true)
                .short("p"),
        )
        .arg(
            Arg::with_name(LIST_ARG)
                .help("describe the tables instead of generating code")
                .long("list"),
        )
        .get_matches();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    bfrt_to_rust(
        matches.value_of(BFRT_ARG).unwrap_or_default(),
        matches.value_of(NON_P4_ARG),
        matches.value_of(OUTPUT_ARG),
        matches.value_of(PIPELINE_ARG),
        matches.is_present(LIST_ARG),
    )
}
