fn main() {
    let args: Vec<String> = std::env::args().collect();
    let md = if args.len() > 1 {
        std::fs::read_to_string(&args[1]).expect("Failed to read file")
    } else {
        "# Sample\n\nplain *italic* **bold**\n\n- a\n- b\n\n[link](ipfs://page)".to_string()
    };

    let config = pageview::Config::compiled_default();
    let buffer = pageview::markdown_to_buffer(&md, &config);

    for run in buffer.runs() {
        println!("{:10?} {:?}", run.style, run.text);
    }
    for span in buffer.link_spans() {
        println!("link {}..{} -> {}", span.start, span.end, span.url);
    }
}
