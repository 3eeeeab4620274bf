//! HTML parsers for index pages, listing tables, and detail pages
//!
//! All selectors target the directory site's fixed markup. The listing rows
//! embed the publisher and director as `document.write('...')` script
//! fragments, so both fields are recovered by splitting the script text on
//! single quotes.

use crate::record::{Description, FilmRecord};
use crate::ScrapeError;
use scraper::{Html, Selector};

/// Anchors pointing at paginated listing pages
const LISTING_LINK_SELECTOR: &str = "li > a.m2r_a";

/// Table rows of a listing page (the first row is the header)
const TABLE_ROW_SELECTOR: &str = "tr";

/// Detail-page link cell
const DETAIL_LINK_SELECTOR: &str = "td:nth-child(2) > a";

/// Film name cell
const FILM_NAME_SELECTOR: &str = "td:nth-child(3)";

/// Publisher script fragment
const PUBLISHER_SELECTOR: &str = "td:nth-child(4) > script";

/// Director script fragment (absent for some rows)
const DIRECTOR_SELECTOR: &str = "td:nth-child(5) > script";

/// Registration place cell
const REGISTRATION_PLACE_SELECTOR: &str = "td:last-child";

/// Synopsis cell on the detail page
const DESCRIPTION_CELL_SELECTOR: &str = "tr:nth-child(8) > td:nth-child(2)";

/// Assignment that carries the total index page count
const PAGE_COUNT_MARKER: &str = "var countPage = ";

fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|_| ScrapeError::Selector(css.to_string()))
}

/// Extracts the ordered listing-page links from an index page
pub fn parse_listing_links(document: &Html) -> Result<Vec<String>, ScrapeError> {
    let link_selector = selector(LISTING_LINK_SELECTOR)?;

    let links = document
        .select(&link_selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(str::to_string)
        .collect();

    Ok(links)
}

/// Parses the total index page count from the raw document text
///
/// The count is published as a `var countPage = N` assignment in an inline
/// script. Its absence is fatal to the whole crawl; there is no fallback.
pub fn parse_page_count(document: &str) -> Result<u32, ScrapeError> {
    let line = document
        .lines()
        .find(|line| line.contains("countPage"))
        .ok_or(ScrapeError::PageCountMissing)?;

    let value = line
        .split(PAGE_COUNT_MARKER)
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .ok_or(ScrapeError::PageCountMissing)?;

    value
        .trim_end_matches(';')
        .parse()
        .map_err(|_| ScrapeError::PageCountMissing)
}

/// Derives the release year from a listing page path
///
/// Listing paths look like `./20240101/index.html`; the second segment
/// starts with the four-digit year.
pub fn release_year_from_path(path: &str) -> Result<String, ScrapeError> {
    let segment = path.split('/').nth(1).ok_or_else(|| ScrapeError::MalformedPath {
        path: path.to_string(),
    })?;

    let year: String = segment.chars().take(4).collect();
    if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
        Ok(year)
    } else {
        Err(ScrapeError::MalformedPath {
            path: path.to_string(),
        })
    }
}

/// Parses every data row of a listing page into film records, in row order
///
/// The first table row is the header and is skipped. A missing director
/// script only blanks that field; any other missing structural element fails
/// the whole page.
pub fn parse_listing_rows(
    document: &Html,
    release_year: &str,
    page_path: &str,
) -> Result<Vec<FilmRecord>, ScrapeError> {
    let row_selector = selector(TABLE_ROW_SELECTOR)?;
    let detail_selector = selector(DETAIL_LINK_SELECTOR)?;
    let name_selector = selector(FILM_NAME_SELECTOR)?;
    let publisher_selector = selector(PUBLISHER_SELECTOR)?;
    let director_selector = selector(DIRECTOR_SELECTOR)?;
    let place_selector = selector(REGISTRATION_PLACE_SELECTOR)?;

    let mut films = Vec::new();

    for row in document.select(&row_selector).skip(1) {
        let detail_path = row
            .select(&detail_selector)
            .next()
            .and_then(|anchor| anchor.value().attr("href"))
            .ok_or_else(|| ScrapeError::MissingElement {
                context: page_path.to_string(),
                selector: DETAIL_LINK_SELECTOR.to_string(),
            })?
            .to_string();

        let film_name = row
            .select(&name_selector)
            .next()
            .ok_or_else(|| ScrapeError::MissingElement {
                context: page_path.to_string(),
                selector: FILM_NAME_SELECTOR.to_string(),
            })?
            .text()
            .collect::<String>()
            .trim()
            .to_string();

        let publisher_blob = row
            .select(&publisher_selector)
            .next()
            .ok_or_else(|| ScrapeError::MissingElement {
                context: page_path.to_string(),
                selector: PUBLISHER_SELECTOR.to_string(),
            })?
            .text()
            .collect::<String>();
        let publisher = quoted_argument(&publisher_blob)
            .ok_or_else(|| ScrapeError::MalformedScript {
                context: format!("publisher of {} in {}", film_name, page_path),
            })?
            .trim()
            .to_string();

        let director = match row.select(&director_selector).next() {
            Some(fragment) => {
                let blob = fragment.text().collect::<String>();
                let name = quoted_argument(&blob).ok_or_else(|| ScrapeError::MalformedScript {
                    context: format!("director of {} in {}", film_name, page_path),
                })?;
                Some(name.to_string())
            }
            None => {
                tracing::warn!("{} in {}: director not found", film_name, page_path);
                None
            }
        };

        let registration_place = row
            .select(&place_selector)
            .next()
            .ok_or_else(|| ScrapeError::MissingElement {
                context: page_path.to_string(),
                selector: REGISTRATION_PLACE_SELECTOR.to_string(),
            })?
            .text()
            .collect::<String>()
            .trim()
            .to_string();

        films.push(FilmRecord {
            release_year: release_year.to_string(),
            film_name,
            publisher,
            director,
            registration_place,
            description: Description::DetailPage(detail_path),
        });
    }

    Ok(films)
}

/// Extracts the raw synopsis cell text from a detail page
///
/// The cell sits at a fixed table position. Its absence is fatal for the
/// record; there is no default description.
pub fn parse_description_cell(document: &Html, detail_path: &str) -> Result<String, ScrapeError> {
    let cell_selector = selector(DESCRIPTION_CELL_SELECTOR)?;

    let cell = document
        .select(&cell_selector)
        .next()
        .ok_or_else(|| ScrapeError::MissingElement {
            context: detail_path.to_string(),
            selector: DESCRIPTION_CELL_SELECTOR.to_string(),
        })?;

    Ok(cell.text().collect::<String>())
}

/// Returns the first single-quoted argument of a script fragment
fn quoted_argument(script: &str) -> Option<&str> {
    script.split('\'').nth(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_PAGE: &str = r#"
        <html><body><table>
        <tr><th>序号</th><th>链接</th><th>电影名称</th><th>发行单位</th><th>编剧</th><th>备案地</th></tr>
        <tr>
            <td>1</td>
            <td><a href="./20240101/d1.html">详情</a></td>
            <td> 电影甲 </td>
            <td><script>document.write('甲公司 ');</script></td>
            <td><script>document.write('张三');</script></td>
            <td> 北京 </td>
        </tr>
        <tr>
            <td>2</td>
            <td><a href="./20240101/d2.html">详情</a></td>
            <td>电影乙</td>
            <td><script>document.write('乙公司');</script></td>
            <td></td>
            <td>上海</td>
        </tr>
        </table></body></html>
    "#;

    #[test]
    fn test_parse_listing_rows_one_record_per_data_row() {
        let document = Html::parse_document(LISTING_PAGE);
        let films = parse_listing_rows(&document, "2024", "./20240101/index.html").unwrap();
        assert_eq!(films.len(), 2);
    }

    #[test]
    fn test_parse_listing_rows_preserves_row_order_and_trims() {
        let document = Html::parse_document(LISTING_PAGE);
        let films = parse_listing_rows(&document, "2024", "./20240101/index.html").unwrap();

        assert_eq!(films[0].film_name, "电影甲");
        assert_eq!(films[0].publisher, "甲公司");
        assert_eq!(films[0].director.as_deref(), Some("张三"));
        assert_eq!(films[0].registration_place, "北京");
        assert_eq!(
            films[0].description,
            Description::DetailPage("./20240101/d1.html".to_string())
        );

        assert_eq!(films[1].film_name, "电影乙");
        assert_eq!(films[1].release_year, "2024");
    }

    #[test]
    fn test_missing_director_does_not_fail_the_row() {
        let document = Html::parse_document(LISTING_PAGE);
        let films = parse_listing_rows(&document, "2024", "./20240101/index.html").unwrap();
        assert_eq!(films[1].director, None);
    }

    #[test]
    fn test_missing_detail_link_fails_the_page() {
        let page = r#"
            <html><body><table>
            <tr><th>h</th></tr>
            <tr><td>1</td><td>no link</td><td>名</td>
                <td><script>document.write('公司');</script></td>
                <td><script>document.write('导演');</script></td>
                <td>地</td></tr>
            </table></body></html>
        "#;
        let document = Html::parse_document(page);
        let result = parse_listing_rows(&document, "2024", "./20240101/index.html");
        assert!(matches!(result, Err(ScrapeError::MissingElement { .. })));
    }

    #[test]
    fn test_unquoted_publisher_fails_the_page() {
        let page = r#"
            <html><body><table>
            <tr><th>h</th></tr>
            <tr><td>1</td><td><a href="./20240101/d.html">x</a></td><td>名</td>
                <td><script>document.write(name);</script></td>
                <td><script>document.write('导演');</script></td>
                <td>地</td></tr>
            </table></body></html>
        "#;
        let document = Html::parse_document(page);
        let result = parse_listing_rows(&document, "2024", "./20240101/index.html");
        assert!(matches!(result, Err(ScrapeError::MalformedScript { .. })));
    }

    #[test]
    fn test_parse_listing_links_in_document_order() {
        let page = r#"
            <html><body><ul>
            <li><a class="m2r_a" href="./20240101/index.html">一月</a></li>
            <li><a class="m2r_a" href="./20240201/index.html">二月</a></li>
            <li><a href="./ignored.html">无标记</a></li>
            </ul></body></html>
        "#;
        let document = Html::parse_document(page);
        let links = parse_listing_links(&document).unwrap();
        assert_eq!(links, vec!["./20240101/index.html", "./20240201/index.html"]);
    }

    #[test]
    fn test_parse_page_count() {
        let document = "<html>\n<script>\nvar countPage = 3\nvar other = 1\n</script>\n</html>";
        assert_eq!(parse_page_count(document).unwrap(), 3);
    }

    #[test]
    fn test_parse_page_count_with_semicolon() {
        let document = "var countPage = 24;\n";
        assert_eq!(parse_page_count(document).unwrap(), 24);
    }

    #[test]
    fn test_missing_page_count_marker_is_fatal() {
        let document = "<html><body>no marker here</body></html>";
        assert!(matches!(
            parse_page_count(document),
            Err(ScrapeError::PageCountMissing)
        ));
    }

    #[test]
    fn test_release_year_from_path() {
        assert_eq!(release_year_from_path("./20240101/index.html").unwrap(), "2024");
        assert_eq!(release_year_from_path("./202312/t123.html").unwrap(), "2023");
    }

    #[test]
    fn test_release_year_rejects_non_numeric_segment() {
        assert!(release_year_from_path("./about/index.html").is_err());
        assert!(release_year_from_path("index.html").is_err());
    }

    #[test]
    fn test_parse_description_cell() {
        let rows: String = (1..=7)
            .map(|n| format!("<tr><td>字段{n}</td><td>值{n}</td></tr>"))
            .collect();
        let page = format!(
            "<html><body><table>{rows}<tr><td>梗概</td><td> 简介: 一个关于远行的故事 </td></tr></table></body></html>"
        );
        let document = Html::parse_document(&page);
        let text = parse_description_cell(&document, "./20240101/d1.html").unwrap();
        assert_eq!(text.trim(), "简介: 一个关于远行的故事");
    }

    #[test]
    fn test_missing_description_cell_is_fatal() {
        let page = "<html><body><table><tr><td>只有一行</td></tr></table></body></html>";
        let document = Html::parse_document(page);
        let result = parse_description_cell(&document, "./20240101/d1.html");
        assert!(matches!(result, Err(ScrapeError::MissingElement { .. })));
    }
}
