//! Reference page catalog and bundled default content.

const HOME: &str = include_str!("../content/home.md");
const BASIC_TYPES: &str = include_str!("../content/basic-types.md");
const PERFORMANCE: &str = include_str!("../content/performance.md");
const TESTING: &str = include_str!("../content/testing.md");
const TEMPLATE: &str = include_str!("../content/template.md");

/// Title used when a page has no curated default.
const UNTITLED_PAGE: &str = "新しいページ";

/// Editable reference page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDef {
    pub id: &'static str,
    pub title: &'static str,
}

const PAGES: &[PageDef] = &[
    PageDef { id: "home", title: "ホーム" },
    PageDef { id: "basic-types", title: "基本データ型" },
    PageDef { id: "views", title: "ビュー" },
    PageDef { id: "modifiers", title: "モディファイア" },
    PageDef { id: "layout", title: "レイアウト" },
    PageDef { id: "navigation", title: "ナビゲーション" },
    PageDef { id: "data-flow", title: "データフロー" },
    PageDef { id: "animation", title: "アニメーション" },
    PageDef { id: "gestures", title: "ジェスチャー" },
    PageDef { id: "drawing", title: "描画とグラフィックス" },
    PageDef { id: "performance", title: "パフォーマンス最適化" },
    PageDef { id: "testing", title: "テストとデバッグ" },
];

/// Fixed set of pages the admin editor may change.
#[derive(Debug, Clone, Copy)]
pub struct PageCatalog {
    pages: &'static [PageDef],
}

impl PageCatalog {
    /// Returns catalog of the bundled reference pages.
    pub fn builtin() -> Self {
        Self { pages: PAGES }
    }

    pub fn pages(&self) -> &'static [PageDef] {
        self.pages
    }

    pub fn find(&self, id: &str) -> Option<&'static PageDef> {
        self.pages.iter().find(|page| page.id == id)
    }

    /// Returns the content a page starts with before anyone edits it.
    ///
    /// Curated pages ship their own text; every other page gets a titled
    /// template. Unknown ids fall back to a generic title.
    pub fn default_content(&self, id: &str) -> String {
        match id {
            "home" => HOME.to_string(),
            "basic-types" => BASIC_TYPES.to_string(),
            "performance" => PERFORMANCE.to_string(),
            "testing" => TESTING.to_string(),
            other => {
                let title = self.find(other).map_or(UNTITLED_PAGE, |page| page.title);
                format!("# {}\n\n{}", title, TEMPLATE)
            }
        }
    }
}

impl Default for PageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
