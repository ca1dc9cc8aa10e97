// Observer: subscribers are told whenever the subject changes.

use std::rc::Rc;

use crate::console::{say, Console};

pub trait Subscriber {
    fn name(&self) -> &str;
    fn inform(&self, news: &str, out: &mut dyn Console);
}

pub struct Reader {
    name: String,
}

impl Reader {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Subscriber for Reader {
    fn name(&self) -> &str {
        &self.name
    }

    fn inform(&self, news: &str, out: &mut dyn Console) {
        say!(out, "{} has been informed about: {news}", self.name);
    }
}

#[derive(Default)]
pub struct AutoNews {
    news: String,
    actions: Vec<Rc<dyn Subscriber>>,
}

impl AutoNews {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: Rc<dyn Subscriber>) {
        self.actions.push(observer);
    }

    /// Removes every subscriber with this name. Returns how many were removed.
    pub fn unregister(&mut self, name: &str) -> usize {
        let before = self.actions.len();
        self.actions.retain(|s| s.name() != name);
        before - self.actions.len()
    }

    pub fn set_news(&mut self, text: &str, out: &mut dyn Console) {
        self.news = text.to_string();
        self.notify_all(out);
    }

    pub fn news(&self) -> &str {
        &self.news
    }

    fn notify_all(&self, out: &mut dyn Console) {
        for subscriber in &self.actions {
            subscriber.inform(&self.news, out);
        }
    }
}

pub fn demo(out: &mut dyn Console) {
    let mut auto_news = AutoNews::new();
    auto_news.register(Rc::new(Reader::new("Jack")));
    auto_news.register(Rc::new(Reader::new("Max")));

    auto_news.set_news("New Tesla price is 40 000", out);

    auto_news.unregister("Max");
    auto_news.set_news("Audi cuts prices", out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_unregister_unknown() {
        let mut news = AutoNews::new();
        news.register(Rc::new(Reader::new("Jack")));
        assert_eq!(news.unregister("Bob"), 0);
        assert_eq!(news.unregister("Jack"), 1);
    }

    #[test]
    fn test_no_subscribers_still_stores_news() {
        let mut out = Transcript::new();
        let mut news = AutoNews::new();
        news.set_news("quiet day", &mut out);
        assert_eq!(news.news(), "quiet day");
        assert!(out.is_empty());
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert_eq!(
            out.lines(),
            [
                "Jack has been informed about: New Tesla price is 40 000",
                "Max has been informed about: New Tesla price is 40 000",
                "Jack has been informed about: Audi cuts prices",
            ]
        );
    }
}
