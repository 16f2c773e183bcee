use urlforge::UrlBuilder;

fn main() {
    let mut builder = UrlBuilder::new();

    let url = builder
        .set_scheme("https")
        .set_hostname("example.com")
        .set_port(8080)
        .append_path_segment("search")
        .append_query_param("q", "rust url builder")
        .set_fragment("results")
        .build();
    println!("{url}"); // https://example.com:8080/search?q=rust%20url%20builder#results

    // build() resets the builder, so the same instance serves the next url
    let url = builder
        .set_scheme("http")
        .set_hostname("localhost")
        .set_port(3000)
        .append_path_segment("health")
        .build();
    println!("{url}"); // http://localhost:3000/health
}
