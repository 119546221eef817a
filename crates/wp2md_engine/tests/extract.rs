use pretty_assertions::assert_eq;
use wp2md_engine::{eligible_posts, ExportParser, FieldError, ParseError, RoxmlExportParser};

fn export_with_items(items: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"
     xmlns:content="http://purl.org/rss/1.0/modules/content/"
     xmlns:excerpt="http://wordpress.org/export/1.2/excerpt/"
     xmlns:wp="http://wordpress.org/export/1.2/">
  <channel>
    <title>Example Blog</title>
{items}
  </channel>
</rss>"#
    )
}

#[test]
fn malformed_xml_is_a_parse_error() {
    let result = RoxmlExportParser.parse("<rss><channel></rss>");
    assert!(matches!(result, Err(ParseError::Xml(_))));
}

#[test]
fn document_without_channel_is_a_parse_error() {
    let result = RoxmlExportParser.parse("<rss version=\"2.0\"></rss>");
    assert!(matches!(result, Err(ParseError::MissingChannel)));
}

#[test]
fn channel_without_items_parses_to_empty_document() {
    let doc = RoxmlExportParser.parse(&export_with_items("")).unwrap();
    assert_eq!(doc.posts.len(), 0);
}

#[test]
fn unpublished_and_statusless_items_are_skipped() {
    let xml = export_with_items(
        r#"    <item>
      <title>Draft Post</title>
      <wp:status>draft</wp:status>
      <wp:post_date_gmt>2024-01-15 10:30:00</wp:post_date_gmt>
      <wp:post_modified_gmt>2024-01-15 10:30:00</wp:post_modified_gmt>
      <content:encoded><![CDATA[<p>hidden</p>]]></content:encoded>
    </item>
    <item>
      <title>No Status</title>
      <wp:post_date_gmt>2024-01-15 10:30:00</wp:post_date_gmt>
      <wp:post_modified_gmt>2024-01-15 10:30:00</wp:post_modified_gmt>
      <content:encoded><![CDATA[<p>also hidden</p>]]></content:encoded>
    </item>"#,
    );
    let doc = RoxmlExportParser.parse(&xml).unwrap();
    assert_eq!(doc.posts.len(), 2);
    assert_eq!(eligible_posts(&doc).count(), 0);
}

#[test]
fn published_item_extracts_fields_and_partitions_taxonomy() {
    let xml = export_with_items(
        r#"    <item>
      <title>Hello World</title>
      <wp:status>publish</wp:status>
      <wp:post_date_gmt>2024-01-15 10:30:00</wp:post_date_gmt>
      <wp:post_modified_gmt>2024-01-16 08:00:00</wp:post_modified_gmt>
      <content:encoded><![CDATA[<p>Hi <b>there</b></p>]]></content:encoded>
      <excerpt:encoded><![CDATA[short teaser]]></excerpt:encoded>
      <category domain="category" nicename="tech"><![CDATA[Tech]]></category>
      <category domain="post_tag" nicename="intro"><![CDATA[intro]]></category>
      <category domain="category" nicename="life"><![CDATA[Life]]></category>
      <category domain="nav_menu" nicename="menu"><![CDATA[Menu]]></category>
    </item>"#,
    );
    let doc = RoxmlExportParser.parse(&xml).unwrap();
    let post = eligible_posts(&doc).next().unwrap().unwrap();

    assert_eq!(post.title, "Hello World");
    assert_eq!(post.published_at, "2024-01-15 10:30:00");
    assert_eq!(post.modified_at, "2024-01-16 08:00:00");
    // The excerpt shares the `encoded` local name; the body must come from
    // the content namespace.
    assert_eq!(post.body_html, "<p>Hi <b>there</b></p>");
    assert_eq!(post.categories, vec!["Tech", "Life"]);
    assert_eq!(post.tags, vec!["intro"]);
}

#[test]
fn empty_or_missing_title_defaults_to_untitled() {
    let xml = export_with_items(
        r#"    <item>
      <title></title>
      <wp:status>publish</wp:status>
      <wp:post_date_gmt>2024-01-15 10:30:00</wp:post_date_gmt>
      <wp:post_modified_gmt>2024-01-15 10:30:00</wp:post_modified_gmt>
      <content:encoded><![CDATA[<p>x</p>]]></content:encoded>
    </item>
    <item>
      <wp:status>publish</wp:status>
      <wp:post_date_gmt>2024-01-15 10:30:00</wp:post_date_gmt>
      <wp:post_modified_gmt>2024-01-15 10:30:00</wp:post_modified_gmt>
      <content:encoded><![CDATA[<p>y</p>]]></content:encoded>
    </item>"#,
    );
    let doc = RoxmlExportParser.parse(&xml).unwrap();
    let titles: Vec<String> = eligible_posts(&doc)
        .map(|p| p.unwrap().title)
        .collect();
    assert_eq!(titles, vec!["untitled", "untitled"]);
}

#[test]
fn missing_publication_date_is_a_field_error() {
    let xml = export_with_items(
        r#"    <item>
      <title>Broken</title>
      <wp:status>publish</wp:status>
      <wp:post_modified_gmt>2024-01-15 10:30:00</wp:post_modified_gmt>
      <content:encoded><![CDATA[<p>x</p>]]></content:encoded>
    </item>"#,
    );
    let doc = RoxmlExportParser.parse(&xml).unwrap();
    let err = eligible_posts(&doc).next().unwrap().unwrap_err();
    assert_eq!(
        err,
        FieldError::Missing {
            title: "Broken".to_string(),
            field: "wp:post_date_gmt",
        }
    );
}

#[test]
fn missing_body_is_a_field_error() {
    let xml = export_with_items(
        r#"    <item>
      <title>No Body</title>
      <wp:status>publish</wp:status>
      <wp:post_date_gmt>2024-01-15 10:30:00</wp:post_date_gmt>
      <wp:post_modified_gmt>2024-01-15 10:30:00</wp:post_modified_gmt>
    </item>"#,
    );
    let doc = RoxmlExportParser.parse(&xml).unwrap();
    let err = eligible_posts(&doc).next().unwrap().unwrap_err();
    assert_eq!(
        err,
        FieldError::Missing {
            title: "No Body".to_string(),
            field: "content:encoded",
        }
    );
}
