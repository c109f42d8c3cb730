//! Locator Demo - Normalization Forms
//!
//! Walks through every input shape Ubicar normalizes into a canonical
//! strategy-tagged locator.
//!
//! # Running
//!
//! ```bash
//! cargo run --example locator_demo -p ubicar
//! ```

#![allow(clippy::uninlined_format_args, clippy::unwrap_used)]

use std::collections::BTreeMap;

use ubicar::{DescribeLocator, Locator, LocatorSource, MockElement, MockLookup, Strategy};

fn main() {
    println!("=== Ubicar Locator Demo ===\n");

    demo_bare_strings();
    demo_factories();
    demo_entries();
    demo_self_description();
    demo_config_files();
    demo_delegation();

    println!("\n=== Locator Demo Complete ===");
}

fn demo_bare_strings() {
    println!("--- Demo 1: Bare Strings ---\n");

    // Simple tag/#id/.class shapes are detected as CSS selectors.
    for text in ["div#foo.bar.baz", "#login", ".btn-primary"] {
        let locator = Locator::new(text).unwrap();
        println!("{:24} => {}", text, locator);
    }

    // Anything else is assumed to be XPath.
    for text in ["//h1", "//a[@href='/home']", "div > span"] {
        let locator = Locator::new(text).unwrap();
        println!("{:24} => {}", text, locator);
    }

    println!();
}

fn demo_factories() {
    println!("--- Demo 2: Factories and Wire Pairs ---\n");

    // Factories bypass the heuristic entirely.
    let link = Locator::by_link_text("Sign in");
    println!("by_link_text:  {}", link);

    // Raw wire pairs validate against the canonical identifier set.
    let raw = Locator::from_pair("partial link text", "Sign").unwrap();
    println!("wire pair:     {}", raw);

    let bad = Locator::from_pair("definitely not a strategy", "x");
    println!("bad strategy:  {}", bad.unwrap_err());

    println!();
}

fn demo_entries() {
    println!("--- Demo 3: Named Entries ---\n");

    // `by` + `locator` spell out the pair.
    let explicit = Locator::from_entries([("by", "xpath"), ("locator", "//h1")]).unwrap();
    println!("by + locator:  {}", explicit);

    // A short strategy name sets both in one step.
    let shorthand = Locator::from_entries([("css", "#something")]).unwrap();
    println!("short name:    {}", shorthand);

    // Maps are just entries passed by name.
    let mut map = BTreeMap::new();
    map.insert("tag".to_string(), "button".to_string());
    println!("map form:      {}", Locator::new(map).unwrap());

    // Conflicts and unknown keys fail loudly.
    let conflict = Locator::from_entries([("by", "xpath"), ("css", "#x")]);
    println!("conflict:      {}", conflict.unwrap_err());

    println!();
}

struct LoginForm;

impl DescribeLocator for LoginForm {
    fn describe_locator(&self) -> LocatorSource {
        LocatorSource::Selector("#login-form".to_string())
    }
}

fn demo_self_description() {
    println!("--- Demo 4: Self-Describing Values ---\n");

    let form = LoginForm;
    let locator = Locator::from_description(&form).unwrap();
    println!("LoginForm      => {}", locator);

    println!();
}

fn demo_config_files() {
    println!("--- Demo 5: Locators from Config ---\n");

    // JSON values route through the same normalization rules.
    let from_json = Locator::from_value(serde_json::json!({"by": "id", "locator": "app"}));
    println!("json object:   {}", from_json.unwrap());

    // YAML page maps parse straight into locators.
    let yaml = "heading: //h1\nsubmit: {by: css, locator: button.submit}\n";
    let page: BTreeMap<String, Locator> = serde_yaml_ng::from_str(yaml).unwrap();
    for (name, locator) in &page {
        println!("yaml {:10} => {}", name, locator);
    }

    println!();
}

fn demo_delegation() {
    println!("--- Demo 6: Delegated Lookup ---\n");

    let host = MockLookup::new()
        .with_element(MockElement::new("h1-0", "h1"))
        .with_element(MockElement::new("h1-1", "h1"));

    let heading = Locator::by_xpath("//h1");
    let first = heading.find_one_on(&host).unwrap();
    let all = heading.find_all_on(&host).unwrap();

    println!("find_one:      {:?}", first);
    println!("find_all:      {} elements", all.len());
    println!(
        "recorded:      {:?}",
        host.was_called_with("find_one", Strategy::XPath, "//h1")
    );
}
