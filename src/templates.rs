use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use crate::{auth::is_admin, state::AppState, view::View};

pub fn render<T: Template>(template: T) -> HttpResponse {
    match template.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Template render error: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[derive(Clone, Debug)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// Navbar, clock, and footer data shared by every public page.
#[derive(Clone, Debug)]
pub struct Chrome {
    pub page_title: &'static str,
    pub nav: Vec<NavItem>,
    pub staff_nav: Vec<NavItem>,
    pub staff_active: bool,
    pub admin_href: &'static str,
    pub date_line: String,
    pub time_line: String,
}

impl Chrome {
    pub fn new(view: View, state: &AppState, req: &HttpRequest) -> Self {
        let clock = state.clock.read();
        let item = |target: View| NavItem {
            label: target.title(),
            href: target.path(),
            active: view == target,
        };

        Self {
            page_title: view.title(),
            nav: [
                View::Home,
                View::About,
                View::Services,
                View::Notices,
                View::Downloads,
            ]
            .into_iter()
            .map(item)
            .collect(),
            staff_nav: View::STAFF.into_iter().map(item).collect(),
            staff_active: view.is_staff_page(),
            admin_href: if is_admin(req) {
                View::AdminDashboard.path()
            } else {
                View::AdminLogin.path()
            },
            date_line: clock.date_line(),
            time_line: clock.time_line(),
        }
    }
}
