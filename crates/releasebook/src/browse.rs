use std::fmt::Display;

use releasebook_core::{Controller, Event, SortKey, ViewMode};

use crate::{output, prompt};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Action {
    Search,
    Sort,
    ToggleView,
    Open,
    Close,
    Months,
    Done,
}

impl Action {
    const ALL: [Self; 7] = [
        Self::Search,
        Self::Sort,
        Self::ToggleView,
        Self::Open,
        Self::Close,
        Self::Months,
        Self::Done,
    ];
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Search => "Search",
            Self::Sort => "Change sort order",
            Self::ToggleView => "Toggle grid / list view",
            Self::Open => "Open a release",
            Self::Close => "Close the open release",
            Self::Months => "Show releases by month",
            Self::Done => "Done",
        })
    }
}

/// Drive `controller` from prompts until the user picks "Done".
pub(crate) fn run(controller: &mut Controller) -> Result<(), prompt::Error> {
    println!("{}", output::release_lines(&controller.render()));
    loop {
        let event = match prompt::select(Action::ALL.to_vec(), "What next?")? {
            Action::Search => Event::SearchInput(prompt::get_input("Search for:")?),
            Action::Sort => Event::SortChange(prompt::select(SortKey::ALL.to_vec(), "Sort by")?),
            Action::ToggleView => Event::SetView(match controller.state().view_mode {
                ViewMode::Grid => ViewMode::List,
                ViewMode::List => ViewMode::Grid,
            }),
            Action::Open => {
                let versions = controller
                    .state()
                    .filtered_releases
                    .iter()
                    .map(|release| release.version.clone())
                    .collect::<Vec<_>>();
                if versions.is_empty() {
                    println!("Nothing to open");
                    continue;
                }
                Event::OpenDetail(prompt::select(versions, "Which release?")?)
            }
            Action::Close => Event::CloseDetail,
            Action::Months => {
                println!("{}", output::month_lines(&controller.render()));
                continue;
            }
            Action::Done => return Ok(()),
        };
        let render = controller.handle(event);
        match output::detail_lines(&render) {
            Some(detail) => println!("{detail}"),
            None => println!("{}", output::release_lines(&render)),
        }
    }
}
