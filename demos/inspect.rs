fn main() {
    let args: Vec<String> = std::env::args().collect();
    let md = if args.len() > 1 {
        std::fs::read_to_string(&args[1]).expect("Failed to read file")
    } else {
        "# Welcome\n\nSee the [example page](ipfs://QmQzhn6hEfbYdCfwzYFsSt3eWpubVKA1dNqsgUwci5vHwq).".to_string()
    };

    // Load config from current directory
    let config = pageview::Config::load(std::path::Path::new("config.toml"));
    let doc = pageview::parse(&md);
    for command in pageview::render(&doc, &config) {
        println!("{command:?}");
    }
}
