//! Record types shared by the access tests.

use std::sync::Arc;

use memberwise_access::Record;

#[derive(Clone, Debug, Default, PartialEq, Record)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Record)]
pub struct Config {
    pub timeout: i32,
    pub retries: i32,
    secret: String,
}

impl Config {
    pub fn new(timeout: i32, retries: i32) -> Self {
        Self {
            timeout,
            retries,
            secret: String::new(),
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn set_secret(&mut self, secret: &str) {
        self.secret = secret.to_string();
    }
}

/// A record whose members are all properties.
#[derive(Clone, Debug, Default, PartialEq, Record)]
#[record(property(name = "width", ty = "f64", get = "Self::width", set = "Self::set_width"))]
#[record(property(name = "height", ty = "f64", get = "Self::height", set = "Self::set_height"))]
#[record(property(name = "area", ty = "f64", get = "Self::area"))]
pub struct Rect {
    w: f64,
    h: f64,
}

impl Rect {
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    fn width(&self) -> f64 {
        self.w
    }

    fn set_width(&mut self, w: f64) {
        self.w = w;
    }

    fn height(&self) -> f64 {
        self.h
    }

    fn set_height(&mut self, h: f64) {
        self.h = h;
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }
}

#[derive(Clone, Debug, Default, PartialEq, Record)]
pub struct Named {
    pub name: String,
    pub id: u32,
}

/// Embeds [`Named`] as its base record.
#[derive(Clone, Debug, Default, PartialEq, Record)]
#[record(property(name = "label", ty = "String", get = "Self::label", set = "Self::set_label"))]
pub struct Employee {
    pub salary: f64,
    pub tags: Vec<String>,
    pub manager: Option<String>,
    #[record(base)]
    pub person: Named,
    #[record(skip)]
    pub scratch: i32,
    #[record(rename = "dept")]
    pub department: String,
}

impl Employee {
    fn label(&self) -> String {
        format!("{} ({})", self.person.name, self.department)
    }

    fn set_label(&mut self, label: String) {
        self.department = label;
    }
}

/// Shadows a base member name with its own field.
#[derive(Clone, Debug, Default, PartialEq, Record)]
pub struct Shadowing {
    pub id: String,
    #[record(base)]
    pub inner: Named,
}

/// Opaque handle with no `PartialEq`.
#[derive(Debug, Default)]
pub struct Connection {
    pub endpoint: String,
}

#[derive(Clone, Debug, Default, Record)]
pub struct Session {
    pub user: String,
    #[record(opaque, identity)]
    pub connection: Arc<Connection>,
    #[record(compare = "eq_ignore_case")]
    pub locale: String,
}

#[allow(clippy::ptr_arg)]
fn eq_ignore_case(a: &String, b: &String) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// A type that refuses to be described.
#[derive(Clone, Debug, Default)]
pub struct NotARecord;

impl Record for NotARecord {
    fn describe(
        _: &mut memberwise_access::TableBuilder<Self>,
    ) -> memberwise_access::Result<()> {
        Err(memberwise_access::Error::unsupported_shape(
            "NotARecord",
            "no named members",
        ))
    }
}

/// Unsigned and narrow numeric members.
#[derive(Clone, Debug, Default, PartialEq, Record)]
pub struct Meter {
    pub hits: u64,
    pub slots: usize,
    pub ratio: f32,
}
