//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "App Name,App Id,Category,Rating,Rating Count,Installs,Minimum Installs,Maximum Installs,Free,Price,Currency,Size,Minimum Android,Developer Id,Developer Email";

/// A small catalogue exercising quoting, odd prices and broken cells.
pub fn sample_catalogue() -> String {
    let rows = [
        r#"Gakondo,com.ishakwe.gakondo,Adventure,0,0,10+,10,15,True,0,USD,10M,7.1 and up,Jean Confident Irénée NIYIZIBYOSE,jean21101999@gmail.com"#,
        r#""Maps, Navigate & Explore",com.acme.maps,Travel & Local,4.1,120,"1,000,000+",1000000,1500000,True,0,USD,40M,5.0 and up,Acme Inc,dev@com.acme.io"#,
        r#"Acme Pro,com.acme.pro,Tools,4.5,3,"5,000+",5000,7500,False,$4.99,USD,5.5M,8.0 and up,Acme Inc,dev@com.acme.io"#,
        r#"Acme Notes,com.acme.notes,Productivity,4.0,9,100+,100,120,True,0,USD,2M,8.0 and up,Acme Inc,dev@com.acme.io"#,
        r#""The ""Best"" Timer",io.indie.timer,Tools,3.9,1,50+,50,60,False,$1.99,USD,1M,6.0 and up,Indie Dev,indie@gmail.com"#,
        r#"Pricey,io.indie.pricey,Tools,5.0,1,1+,1,1,False,"$1,299.99",USD,1M,6.0 and up,Indie Dev,indie@gmail.com"#,
        r#"Broken,org.broken,Tools,,,lots,0,0,False,Free,USD,,,,"#,
        r#"NoMail,org.quiet.app,Education,4.2,2,"10,000+",10000,12000,True,0,USD,3M,4.1 and up,Quiet,"#,
    ];

    let mut csv = String::from(HEADER);
    csv.push('\n');
    for row in rows {
        csv.push_str(row);
        csv.push('\n');
    }
    csv
}

pub fn write_catalogue(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, sample_catalogue()).unwrap();
    path
}

pub fn read_table(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap_or_else(|e| panic!("reading {name}: {e}"))
}
