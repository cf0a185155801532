use axum::http::Method;

/// ルートが指すハンドラ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    MainPage,
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// 1 文字以上の ASCII 数字にマッチする名前付きキャプチャ
    Digits(String),
}

/// `/{width}x{height}.jpg` 形式のパスパターン
///
/// `{name}` は数字の並びにマッチする。キャプチャは貪欲に数字を読むため、
/// キャプチャ直後のリテラルは数字で始まってはならない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut rest = template;

        while !rest.is_empty() {
            if let Some(inner) = rest.strip_prefix('{')
                && let Some(end) = inner.find('}')
            {
                segments.push(Segment::Digits(inner[..end].to_string()));
                rest = &inner[end + 1..];
                continue;
            }

            // 次の `{` までをリテラルとして扱う（閉じていない `{` も含む）
            let end = rest
                .char_indices()
                .skip(1)
                .find(|(_, c)| *c == '{')
                .map_or(rest.len(), |(i, _)| i);
            segments.push(Segment::Literal(rest[..end].to_string()));
            rest = &rest[end..];
        }

        Self { segments }
    }

    /// パス全体がパターンに一致する場合にキャプチャを返す
    pub fn matches<'a>(&'a self, path: &'a str) -> Option<Captures<'a>> {
        let mut captures = Captures::default();
        let mut rest = path;

        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => {
                    rest = rest.strip_prefix(literal.as_str())?;
                }
                Segment::Digits(name) => {
                    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
                    if len == 0 {
                        return None;
                    }
                    captures.values.push((name.as_str(), &rest[..len]));
                    rest = &rest[len..];
                }
            }
        }

        rest.is_empty().then_some(captures)
    }
}

/// パスパターンから取り出した値
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Captures<'a> {
    values: Vec<(&'a str, &'a str)>,
}

impl<'a> Captures<'a> {
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
}

#[derive(Debug, Clone)]
struct Route {
    /// `None` は全メソッドを受け付ける
    method: Option<Method>,
    pattern: PathPattern,
    endpoint: Endpoint,
}

#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub endpoint: Endpoint,
    pub captures: Captures<'a>,
}

/// 登録順に評価されるルーティングテーブル
///
/// 起動時に一度だけ構築し、以降は変更しない。
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// プレースホルダー画像サービスのルート一覧
    pub fn standard() -> Self {
        Self::default()
            .any("/", Endpoint::MainPage)
            .get("/{width}", Endpoint::Image)
            .get("/{width}.jpg", Endpoint::Image)
            .get("/{width}/{height}", Endpoint::Image)
            .get("/{width}x{height}", Endpoint::Image)
            .get("/{width}/{height}.jpg", Endpoint::Image)
            .get("/{width}x{height}.jpg", Endpoint::Image)
    }

    pub fn get(self, template: &str, endpoint: Endpoint) -> Self {
        self.route(Some(Method::GET), template, endpoint)
    }

    pub fn any(self, template: &str, endpoint: Endpoint) -> Self {
        self.route(None, template, endpoint)
    }

    pub fn route(mut self, method: Option<Method>, template: &str, endpoint: Endpoint) -> Self {
        self.routes.push(Route {
            method,
            pattern: PathPattern::parse(template),
            endpoint,
        });
        self
    }

    /// 最初に一致したルートを返す。一致しなければ `None`
    pub fn resolve<'a>(&'a self, method: &Method, path: &'a str) -> Option<RouteMatch<'a>> {
        self.routes.iter().find_map(|route| {
            if route.method.as_ref().is_some_and(|m| m != method) {
                return None;
            }
            route.pattern.matches(path).map(|captures| RouteMatch {
                endpoint: route.endpoint,
                captures,
            })
        })
    }
}
