use std::sync::Arc;

use client::InMemoryServer;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{
    Language, QuestionRecord, QuizLaunch, TitleDetail, TitlePath, TopicId, TopicSummary,
    TranslationTable,
};
use quiz_core::time::fixed_clock;
use services::{AppServices, Localizer, TableSource};

use crate::context::{LocaleState, UiApp, build_app_context};
use crate::views::{HomeView, LanguageSwitcher, QuizView, TitleView};

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }

    fn initial_language(&self) -> Language {
        Language::En
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Title(TitlePath),
    Play,
    Language,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    localizer: Localizer,
    launch: Option<QuizLaunch>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_hook(|| {
        if let Some(launch) = props.launch.clone() {
            ctx.set_pending_launch(launch);
        }
    });
    use_context_provider(|| LocaleState::new(props.localizer.clone()));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Title(path) => rsx! {
            TitleView {
                category: path.category,
                subcategory: path.subcategory,
                title: path.title,
            }
        },
        ViewKind::Play => rsx! { QuizView {} },
        ViewKind::Language => rsx! { LanguageSwitcher {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub server: InMemoryServer,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let resources resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..5 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn basics_path() -> TitlePath {
    TitlePath::new("Languages", "Hungarian", "Basics")
}

pub fn seeded_server() -> InMemoryServer {
    let server = InMemoryServer::new();
    let questions = vec![
        QuestionRecord::new("Szia (Hello)", ["Hello", "Bye"], 0).with_topic("greetings", "Greetings"),
        QuestionRecord::new("Viszlát (Bye)", ["Hello", "Bye"], 1),
        QuestionRecord::new("Köszönöm (Thanks)", ["Thanks", "Sorry"], 0),
    ];
    let detail = TitleDetail {
        name: "Basics".into(),
        description: Some("Everyday words".into()),
        total_questions: 0,
        learning_objectives: vec!["Greet people".into()],
        study_tips: vec!["Say it out loud".into()],
        topics: vec![TopicSummary {
            id: TopicId::new("greetings"),
            name: "Greetings".into(),
            total_questions: 0,
        }],
    };
    server
        .add_title(basics_path(), detail, questions)
        .expect("seed title");
    server
}

pub fn hungarian_localizer() -> Localizer {
    let table: TranslationTable = [
        ("home.heading", "Kategóriák"),
        ("category.description", "Fedezd fel a(z) {} témákat"),
        ("setup.start", "Kvíz indítása"),
    ]
    .into_iter()
    .collect();
    Localizer::new(Language::Hu, table, TableSource::Requested)
}

pub fn setup_view_harness(
    view: ViewKind,
    server: InMemoryServer,
    localizer: Localizer,
    launch: Option<QuizLaunch>,
) -> ViewHarness {
    let services = AppServices::in_memory(server.clone(), fixed_clock());
    let app = Arc::new(TestApp { services });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            localizer,
            launch,
        },
    );
    ViewHarness { dom, server }
}
