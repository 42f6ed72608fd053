#![forbid(unsafe_code)]

use dhaalan_cms::{Exhibitor, NewsArticle, Remote};
use dhaalan_state::LocaleStore;

/// Landing page: hero copy, the featured-exhibitor carousel, and the
/// three latest news articles.
#[derive(Debug, Default)]
pub struct HomePage {
    pub featured: Remote<Vec<Exhibitor>>,
    pub news: Remote<Vec<NewsArticle>>,
}

impl HomePage {
    pub const NEWS_LIMIT: usize = 3;

    pub fn view(&self, locale: &LocaleStore) -> String {
        let mut out = String::new();
        out.push_str(&format!("== {} ==\n", locale.resolve("heroTitle")));
        out.push_str(&locale.resolve("heroSubtitle"));
        out.push('\n');
        out.push_str(&locale.resolve("heroDates"));
        out.push_str("\n\n");

        out.push_str(&format!("{}:\n", locale.resolve("nav.exhibitors")));
        match &self.featured {
            Remote::Pending => out.push_str(&format!("  {}\n", locale.resolve("loading"))),
            Remote::Failed(_) => out.push_str(&format!(
                "  {} [r: {}]\n",
                locale.resolve("forms.dataFetchError"),
                locale.resolve("retry")
            )),
            Remote::Ready(featured) => {
                for exhibitor in featured {
                    out.push_str(&format!("  * {} ({})\n", exhibitor.name, exhibitor.zone));
                }
            }
        }

        out.push_str(&format!("\n{}:\n", locale.resolve("nav.news")));
        match &self.news {
            Remote::Pending => out.push_str(&format!("  {}\n", locale.resolve("loading"))),
            Remote::Failed(_) => out.push_str(&format!(
                "  {} [r: {}]\n",
                locale.resolve("forms.dataFetchError"),
                locale.resolve("retry")
            )),
            Remote::Ready(articles) => {
                for article in articles {
                    out.push_str(&format!(
                        "  {} {}\n",
                        article.date,
                        article.title.get(locale.locale())
                    ));
                }
            }
        }
        out
    }
}
