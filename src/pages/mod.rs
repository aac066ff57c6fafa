use crate::components::ui::{
    Alert, AlertDescription, Button, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardItem, CardList, CardTitle, Checkbox, Input, Label, Textarea,
};
use crate::models::{GalleryImage, Note, Section, SiteConfig, StoryMoment, TemperatureUnits, Video};
use crate::state::{AdminContext, AdminState};
use crate::tabs::{is_known_kind, kind_for_tab_id, registry_meta, resolve_tabs};
use icons::{
    ArrowDown, ArrowUp, BookOpen, Calendar, Circle, CircleHelp, Clock, CloudSun, Gift, Heart,
    Image, LayoutGrid, ListChecks, MapPin, Palette, Plus, Settings, Users, Video as VideoIcon,
    Wrench, X,
};
use leptos::prelude::*;

// ───────────────────────── field bindings ──────────────────────────
//
// Every input is document-owned: reads are derived from the config
// signal, writes go through `AdminState::update_config` (one document
// update per keystroke, by contract).

fn text_value(state: AdminState, get: fn(&SiteConfig) -> &str) -> Signal<String> {
    Signal::derive(move || state.config.with(|c| get(c).to_string()))
}

fn text_setter(state: AdminState, set: fn(&mut SiteConfig, String)) -> Callback<String> {
    Callback::new(move |v: String| state.update_config(|c| set(c, v)))
}

fn bool_value(state: AdminState, get: fn(&SiteConfig) -> bool) -> Signal<bool> {
    Signal::derive(move || state.config.with(get))
}

fn bool_setter(state: AdminState, set: fn(&mut SiteConfig, bool)) -> Callback<bool> {
    Callback::new(move |v: bool| state.update_config(|c| set(c, v)))
}

// Per-item bindings for the collection editors. Rows are keyed by the
// item's stable id; positional collections resolve id → current position
// at event time, so a removal elsewhere in the list can't retarget an
// in-flight edit.

fn note_field(state: AdminState, id: &str, get: fn(&Note) -> &str) -> Signal<String> {
    let id = id.to_string();
    Signal::derive(move || {
        state.config.with(|c| {
            c.notes
                .iter()
                .find(|n| n.id == id)
                .map(|n| get(n).to_string())
                .unwrap_or_default()
        })
    })
}

fn story_field(state: AdminState, id: &str, get: fn(&StoryMoment) -> &str) -> Signal<String> {
    let id = id.to_string();
    Signal::derive(move || {
        state.config.with(|c| {
            c.story
                .iter()
                .find(|m| m.id == id)
                .map(|m| get(m).to_string())
                .unwrap_or_default()
        })
    })
}

fn story_setter(
    state: AdminState,
    id: &str,
    set: fn(&mut StoryMoment, String),
) -> Callback<String> {
    let id = id.to_string();
    Callback::new(move |v: String| {
        if let Some(i) = state.story_index(&id) {
            state.update_story_at(i, |m| set(m, v));
        }
    })
}

fn video_field(state: AdminState, id: &str, get: fn(&Video) -> &str) -> Signal<String> {
    let id = id.to_string();
    Signal::derive(move || {
        state.config.with(|c| {
            c.videos
                .iter()
                .find(|v| v.id == id)
                .map(|v| get(v).to_string())
                .unwrap_or_default()
        })
    })
}

fn gallery_field(state: AdminState, id: &str, get: fn(&GalleryImage) -> &str) -> Signal<String> {
    let id = id.to_string();
    Signal::derive(move || {
        state.config.with(|c| {
            c.gallery_images
                .iter()
                .find(|g| g.id == id)
                .map(|g| get(g).to_string())
                .unwrap_or_default()
        })
    })
}

fn gallery_setter(
    state: AdminState,
    id: &str,
    set: fn(&mut GalleryImage, String),
) -> Callback<String> {
    let id = id.to_string();
    Callback::new(move |v: String| {
        if let Some(i) = state.gallery_index(&id) {
            state.update_gallery_at(i, |g| set(g, v));
        }
    })
}

/// Heading for a section panel: the couple's own label when they set one,
/// the registry default otherwise. Looks the section up through the
/// reverse alias mapping, so the `colors` tab finds the `palette`
/// section.
fn section_title(state: AdminState, tab_id: &'static str) -> Signal<String> {
    Signal::derive(move || {
        let kind = kind_for_tab_id(tab_id);
        let custom = state.config.with(|c| {
            c.sections
                .iter()
                .find(|s| s.id == kind)
                .map(|s| s.label.trim().to_string())
        });
        match custom {
            Some(label) if !label.is_empty() => label,
            _ => registry_meta(kind)
                .map(|m| m.label.to_string())
                .unwrap_or_else(|| tab_id.to_string()),
        }
    })
}

// ───────────────────────── shared field rows ────────────────────────

#[component]
fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, default = "text")] r#type: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2">
            <Label html_for=id.clone()>{label}</Label>
            <Input id=id r#type=r#type placeholder=placeholder value=value on_change=on_change />
        </div>
    }
}

#[component]
fn TextareaField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(default = 3)] rows: u32,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2">
            <Label html_for=id.clone()>{label}</Label>
            <Textarea id=id placeholder=placeholder rows=rows value=value on_change=on_change />
        </div>
    }
}

#[component]
fn ToggleField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into, optional)] hint: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_change: Callback<bool>,
) -> impl IntoView {
    let hint_view =
        (!hint.is_empty()).then(|| view! { <p class="text-xs text-muted-foreground">{hint}</p> });

    view! {
        <div class="flex items-center justify-between gap-4">
            <div class="space-y-1">
                <Label html_for=id.clone()>{label}</Label>
                {hint_view}
            </div>
            <Checkbox id=id checked=checked on_change=on_change />
        </div>
    }
}

// ───────────────────────── shell ────────────────────────────────────

fn tab_icon(icon: &'static str) -> AnyView {
    match icon {
        "users" => view! { <Users class="size-4" /> }.into_any(),
        "list-checks" => view! { <ListChecks class="size-4" /> }.into_any(),
        "layout-grid" => view! { <LayoutGrid class="size-4" /> }.into_any(),
        "settings" => view! { <Settings class="size-4" /> }.into_any(),
        "heart" => view! { <Heart class="size-4" /> }.into_any(),
        "clock" => view! { <Clock class="size-4" /> }.into_any(),
        "calendar" => view! { <Calendar class="size-4" /> }.into_any(),
        "palette" => view! { <Palette class="size-4" /> }.into_any(),
        "image" => view! { <Image class="size-4" /> }.into_any(),
        "gift" => view! { <Gift class="size-4" /> }.into_any(),
        "map-pin" => view! { <MapPin class="size-4" /> }.into_any(),
        "cloud-sun" => view! { <CloudSun class="size-4" /> }.into_any(),
        "circle-help" => view! { <CircleHelp class="size-4" /> }.into_any(),
        "book-open" => view! { <BookOpen class="size-4" /> }.into_any(),
        "video" => view! { <VideoIcon class="size-4" /> }.into_any(),
        "wrench" => view! { <Wrench class="size-4" /> }.into_any(),
        _ => view! { <Circle class="size-4" /> }.into_any(),
    }
}

/// Maps the active tab id to its panel. Tab ids come from the resolver,
/// so the fallback arm is only reachable with a stale active id.
fn panel_for(tab_id: &str) -> AnyView {
    match tab_id {
        "guests" => view! { <GuestsPanel /> }.into_any(),
        "planner" => view! { <PlannerPanel /> }.into_any(),
        "organizer" => view! { <OrganizerPanel /> }.into_any(),
        "general" => view! { <GeneralPanel /> }.into_any(),

        "story" => view! { <StoryPanel /> }.into_any(),
        "timeline" => view! { <TimelinePanel /> }.into_any(),
        "events" => view! { <EventsPanel /> }.into_any(),
        "colors" => view! { <ColorsPanel /> }.into_any(),
        "images" => view! { <ImagesPanel /> }.into_any(),
        "registry" => view! { <RegistryPanel /> }.into_any(),
        "map" => view! { <MapPanel /> }.into_any(),
        "weather" => view! { <WeatherPanel /> }.into_any(),
        "faq" => view! { <FaqPanel /> }.into_any(),
        "guestbook" => view! { <GuestbookPanel /> }.into_any(),
        "videos" => view! { <VideosPanel /> }.into_any(),

        "systems" => view! { <SystemsPanel /> }.into_any(),

        _ => view! {
            <div class="rounded-md border border-border bg-muted p-4 text-sm text-muted-foreground">
                "Nothing to edit here."
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let state = expect_context::<AdminContext>().0;
    let active = state.active_tab;

    let tabs = Memo::new(move |_| state.config.with(|c| resolve_tabs(&c.sections)));

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto w-full max-w-[1080px] px-4 py-8">
                <div class="mb-6 space-y-1">
                    <h1 class="text-xl font-semibold">"Marigold"</h1>
                    <p class="text-xs text-muted-foreground">
                        {move || {
                            let names = state.config.with(|c| c.couple_names.trim().to_string());
                            if names.is_empty() { "Wedding site admin".to_string() } else { names }
                        }}
                    </p>
                </div>

                <nav class="mb-6 flex flex-wrap gap-1 border-b border-border pb-2">
                    {move || {
                        tabs.get()
                            .into_iter()
                            .map(|tab| {
                                let id = tab.id;
                                let is_active = move || active.get() == id;
                                view! {
                                    <button
                                        class=move || {
                                            let base = "inline-flex items-center gap-2 rounded-md px-3 py-1.5 text-sm transition-colors hover:cursor-pointer";
                                            if is_active() {
                                                format!("{base} bg-accent text-accent-foreground font-medium")
                                            } else {
                                                format!("{base} text-muted-foreground hover:bg-accent/50 hover:text-foreground")
                                            }
                                        }
                                        title=tab.label.clone()
                                        on:click=move |_| state.set_active_tab(id)
                                    >
                                        {tab_icon(tab.icon)}
                                        <span class="hidden md:inline">{tab.label.clone()}</span>
                                        <span class="md:hidden">{tab.short_label}</span>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </nav>

                <main>{move || panel_for(active.get())}</main>
            </div>
        </div>
    }
}

// ───────────────────────── system panels ────────────────────────────

#[component]
fn GuestsPanel() -> impl IntoView {
    let state = expect_context::<AdminContext>().0;

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Guest List"</CardTitle>
                <CardDescription>"How guests RSVP on the published site."</CardDescription>
            </CardHeader>
            <CardContent>
                <div class="flex flex-col gap-4">
                    <ToggleField
                        id="rsvp_enabled"
                        label="Collect RSVPs"
                        hint="Shows the RSVP form on the site."
                        checked=bool_value(state, |c| c.rsvp.enabled)
                        on_change=bool_setter(state, |c, v| c.rsvp.enabled = v)
                    />
                    <TextField
                        id="rsvp_deadline"
                        label="RSVP deadline"
                        r#type="date"
                        value=text_value(state, |c| &c.rsvp.deadline)
                        on_change=text_setter(state, |c, v| c.rsvp.deadline = v)
                    />
                    <TextField
                        id="rsvp_contact"
                        label="Contact email"
                        r#type="email"
                        placeholder="you@example.com"
                        value=text_value(state, |c| &c.rsvp.contact_email)
                        on_change=text_setter(state, |c, v| c.rsvp.contact_email = v)
                    />
                    <ToggleField
                        id="rsvp_plus_ones"
                        label="Allow plus-ones"
                        checked=bool_value(state, |c| c.rsvp.allow_plus_ones)
                        on_change=bool_setter(state, |c, v| c.rsvp.allow_plus_ones = v)
                    />
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn PlannerPanel() -> impl IntoView {
    let state = expect_context::<AdminContext>().0;

    let is_empty = move || state.config.with(|c| c.notes.is_empty());
    let open_count = move || state.config.with(|c| c.notes.iter().filter(|n| !n.done).count());

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Planner"</CardTitle>
                <CardDescription>
                    {move || format!("{} open task(s)", open_count())}
                </CardDescription>
            </CardHeader>
            <CardContent>
                <Show
                    when=move || !is_empty()
                    fallback=move || view! {
                        <div class="flex flex-col items-start gap-3">
                            <p class="text-sm text-muted-foreground">"Nothing planned yet."</p>
                            <Button on:click=move |_| state.add_note()>
                                <Plus class="size-4" />
                                "Add the first task"
                            </Button>
                        </div>
                    }
                >
                    <CardList>
                        <For
                            each=move || state.config.with(|c| c.notes.clone())
                            key=|n| n.id.clone()
                            children=move |n: Note| {
                                let done = {
                                    let id = n.id.clone();
                                    Signal::derive(move || {
                                        state.config.with(|c| {
                                            c.notes.iter().find(|x| x.id == id).map(|x| x.done).unwrap_or(false)
                                        })
                                    })
                                };
                                let on_done = {
                                    let id = n.id.clone();
                                    Callback::new(move |v: bool| state.update_note(&id, |note| note.done = v))
                                };
                                let on_text = {
                                    let id = n.id.clone();
                                    Callback::new(move |v: String| state.update_note(&id, |note| note.text = v))
                                };
                                let id_remove = n.id.clone();

                                view! {
                                    <CardItem>
                                        <Checkbox checked=done on_change=on_done />
                                        <div class=move || {
                                            if done.get() { "flex-1 opacity-60" } else { "flex-1" }
                                        }>
                                            <Input
                                                placeholder="What needs doing?"
                                                value=note_field(state, &n.id, |note| &note.text)
                                                on_change=on_text
                                            />
                                        </div>
                                        <button
                                            class="rounded-md p-2 text-muted-foreground transition-colors hover:bg-accent hover:text-foreground hover:cursor-pointer"
                                            title="Remove task"
                                            on:click=move |_| state.remove_note(&id_remove)
                                        >
                                            <X class="size-4" />
                                        </button>
                                    </CardItem>
                                }
                            }
                        />
                    </CardList>
                </Show>
            </CardContent>
            <CardFooter>
                <Show when=move || !is_empty() fallback=|| ().into_view()>
                    <Button
                        class="bg-transparent border border-input text-muted-foreground hover:bg-accent hover:text-accent-foreground"
                        on:click=move |_| state.add_note()
                    >
                        <Plus class="size-4" />
                        "Add task"
                    </Button>
                </Show>
            </CardFooter>
        </Card>
    }
}

#[component]
fn OrganizerPanel() -> impl IntoView {
    let state = expect_context::<AdminContext>().0;

    let count = move || state.config.with(|c| c.sections.len());

    // Reorder by id, resolved to the current position at click time.
    let move_section = move |id: String, delta: i32| {
        state.update_config(|c| {
            let Some(i) = c.sections.iter().position(|s| s.id == id) else {
                return;
            };
            let j = i as i32 + delta;
            if j < 0 || j as usize >= c.sections.len() {
                return;
            }
            c.sections.swap(i, j as usize);
        });
    };

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Organizer"</CardTitle>
                <CardDescription>
                    {move || format!("{} section(s) on the site, top to bottom", count())}
                </CardDescription>
            </CardHeader>
            <CardContent>
                <Show
                    when=move || count() > 0
                    fallback=|| view! {
                        <p class="text-sm text-muted-foreground">
                            "No sections configured. Every known section still gets a tab above."
                        </p>
                    }
                >
                    <CardList>
                        <For
                            each=move || state.config.with(|c| c.sections.clone())
                            key=|s| s.id.clone()
                            children=move |s: Section| {
                                let known = is_known_kind(&s.id);
                                let default_label = registry_meta(&s.id)
                                    .map(|m| m.label)
                                    .unwrap_or("Unknown section");

                                let label = {
                                    let id = s.id.clone();
                                    Signal::derive(move || {
                                        state.config.with(|c| {
                                            c.sections
                                                .iter()
                                                .find(|x| x.id == id)
                                                .map(|x| x.label.clone())
                                                .unwrap_or_default()
                                        })
                                    })
                                };
                                let on_label = {
                                    let id = s.id.clone();
                                    Callback::new(move |v: String| {
                                        let id = id.clone();
                                        state.update_config(move |c| {
                                            if let Some(sec) = c.sections.iter_mut().find(|x| x.id == id) {
                                                sec.label = v;
                                            }
                                        });
                                    })
                                };

                                let id_up = s.id.clone();
                                let id_down = s.id.clone();

                                view! {
                                    <CardItem class="items-start rounded-md border px-3 py-2">
                                        <div class="flex flex-col gap-0.5">
                                            <button
                                                class="rounded p-1 text-muted-foreground transition-colors hover:bg-accent hover:text-foreground hover:cursor-pointer"
                                                title="Move up"
                                                on:click=move |_| move_section(id_up.clone(), -1)
                                            >
                                                <ArrowUp class="size-4" />
                                            </button>
                                            <button
                                                class="rounded p-1 text-muted-foreground transition-colors hover:bg-accent hover:text-foreground hover:cursor-pointer"
                                                title="Move down"
                                                on:click=move |_| move_section(id_down.clone(), 1)
                                            >
                                                <ArrowDown class="size-4" />
                                            </button>
                                        </div>
                                        <div class="flex flex-1 flex-col gap-1">
                                            <div class="text-xs text-muted-foreground">{s.id.clone()}</div>
                                            <Input
                                                placeholder=default_label
                                                value=label
                                                on_change=on_label
                                            />
                                            {(!known).then(|| view! {
                                                <p class="text-xs text-muted-foreground">
                                                    "This build does not know this section; the site skips it."
                                                </p>
                                            })}
                                        </div>
                                    </CardItem>
                                }
                            }
                        />
                    </CardList>
                </Show>
            </CardContent>
        </Card>
    }
}

#[component]
fn GeneralPanel() -> impl IntoView {
    let state = expect_context::<AdminContext>().0;

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"General Settings"</CardTitle>
                <CardDescription>"Names, date, venue, and the site's opening words."</CardDescription>
            </CardHeader>
            <CardContent>
                <div class="flex flex-col gap-4">
                    <TextField
                        id="couple_names"
                        label="Couple"
                        placeholder="June & Henry"
                        value=text_value(state, |c| &c.couple_names)
                        on_change=text_setter(state, |c, v| c.couple_names = v)
                    />
                    <TextField
                        id="wedding_date"
                        label="Wedding date"
                        r#type="date"
                        value=text_value(state, |c| &c.wedding_date)
                        on_change=text_setter(state, |c, v| c.wedding_date = v)
                    />
                    <TextField
                        id="venue_name"
                        label="Venue"
                        placeholder="Orchard House"
                        value=text_value(state, |c| &c.venue_name)
                        on_change=text_setter(state, |c, v| c.venue_name = v)
                    />
                    <TextField
                        id="venue_address"
                        label="Venue address"
                        value=text_value(state, |c| &c.venue_address)
                        on_change=text_setter(state, |c, v| c.venue_address = v)
                    />
                    <TextareaField
                        id="welcome_message"
                        label="Welcome message"
                        placeholder="We're getting married!"
                        value=text_value(state, |c| &c.welcome_message)
                        on_change=text_setter(state, |c, v| c.welcome_message = v)
                    />
                    <TextField
                        id="hero_image_url"
                        label="Hero image URL"
                        r#type="url"
                        placeholder="https://…"
                        value=text_value(state, |c| &c.hero_image_url)
                        on_change=text_setter(state, |c, v| c.hero_image_url = v)
                    />
                </div>
            </CardContent>
        </Card>
    }
}

// ───────────────────────── section panels ───────────────────────────

#[component]
fn StoryPanel() -> impl IntoView {
    let state = expect_context::<AdminContext>().0;
    let title = section_title(state, "story");
    let is_empty = move || state.config.with(|c| c.story.is_empty());

    view! {
        <Card>
            <CardHeader>
                <CardTitle>{move || title.get()}</CardTitle>
                <CardDescription>"Milestones on the story section, in site order."</CardDescription>
            </CardHeader>
            <CardContent>
                <Show
                    when=move || !is_empty()
                    fallback=move || view! {
                        <div class="flex flex-col items-start gap-3">
                            <p class="text-sm text-muted-foreground">"No story moments yet."</p>
                            <Button on:click=move |_| state.add_story_moment()>
                                <Plus class="size-4" />
                                "Add the first moment"
                            </Button>
                        </div>
                    }
                >
                    <CardList>
                        <For
                            each=move || state.config.with(|c| c.story.clone())
                            key=|m| m.id.clone()
                            children=move |m: StoryMoment| {
                                let id_remove = m.id.clone();
                                let on_remove = move |_| {
                                    if let Some(i) = state.story_index(&id_remove) {
                                        state.remove_story_at(i);
                                    }
                                };

                                view! {
                                    <CardItem class="items-start rounded-md border px-4 py-3">
                                        <div class="flex flex-1 flex-col gap-3">
                                            <div class="flex gap-3">
                                                <div class="w-28">
                                                    <Input
                                                        placeholder="2019"
                                                        value=story_field(state, &m.id, |x| &x.year)
                                                        on_change=story_setter(state, &m.id, |x, v| x.year = v)
                                                    />
                                                </div>
                                                <Input
                                                    placeholder="How we met"
                                                    value=story_field(state, &m.id, |x| &x.title)
                                                    on_change=story_setter(state, &m.id, |x, v| x.title = v)
                                                />
                                            </div>
                                            <Textarea
                                                placeholder="Tell the moment…"
                                                rows=2
                                                value=story_field(state, &m.id, |x| &x.text)
                                                on_change=story_setter(state, &m.id, |x, v| x.text = v)
                                            />
                                            <Input
                                                r#type="url"
                                                placeholder="Photo URL (optional)"
                                                value=story_field(state, &m.id, |x| &x.image_url)
                                                on_change=story_setter(state, &m.id, |x, v| x.image_url = v)
                                            />
                                        </div>
                                        <button
                                            class="rounded-md p-2 text-muted-foreground transition-colors hover:bg-accent hover:text-foreground hover:cursor-pointer"
                                            title="Remove moment"
                                            on:click=on_remove
                                        >
                                            <X class="size-4" />
                                        </button>
                                    </CardItem>
                                }
                            }
                        />
                    </CardList>
                </Show>
            </CardContent>
            <CardFooter>
                <Show when=move || !is_empty() fallback=|| ().into_view()>
                    <Button
                        class="bg-transparent border border-input text-muted-foreground hover:bg-accent hover:text-accent-foreground"
                        on:click=move |_| state.add_story_moment()
                    >
                        <Plus class="size-4" />
                        "Add moment"
                    </Button>
                </Show>
            </CardFooter>
        </Card>
    }
}

#[component]
fn TimelinePanel() -> impl IntoView {
    let state = expect_context::<AdminContext>().0;
    let title = section_title(state, "timeline");

    view! {
        <Card>
            <CardHeader>
                <CardTitle>{move || title.get()}</CardTitle>
                <CardDescription>"Introduction above the day-of timeline."</CardDescription>
            </CardHeader>
            <CardContent>
                <TextareaField
                    id="timeline_intro"
                    label="Timeline introduction"
                    placeholder="Here's how the day unfolds…"
                    value=text_value(state, |c| &c.timeline_intro)
                    on_change=text_setter(state, |c, v| c.timeline_intro = v)
                />
            </CardContent>
        </Card>
    }
}

#[component]
fn EventsPanel() -> impl IntoView {
    let state = expect_context::<AdminContext>().0;
    let title = section_title(state, "events");

    view! {
        <Card>
            <CardHeader>
                <CardTitle>{move || title.get()}</CardTitle>
                <CardDescription>"Ceremony and reception details."</CardDescription>
            </CardHeader>
            <CardContent>
                <div class="flex flex-col gap-4">
                    <TextField
                        id="ceremony_time"
                        label="Ceremony time"
                        r#type="time"
                        value=text_value(state, |c| &c.ceremony_time)
                        on_change=text_setter(state, |c, v| c.ceremony_time = v)
                    />
                    <TextField
                        id="reception_time"
                        label="Reception time"
                        r#type="time"
                        value=text_value(state, |c| &c.reception_time)
                        on_change=text_setter(state, |c, v| c.reception_time = v)
                    />
                    <TextField
                        id="dress_code"
                        label="Dress code"
                        placeholder="Garden formal"
                        value=text_value(state, |c| &c.dress_code)
                        on_change=text_setter(state, |c, v| c.dress_code = v)
                    />
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn ColorsPanel() -> impl IntoView {
    let state = expect_context::<AdminContext>().0;
    let title = section_title(state, "colors");

    view! {
        <Card>
            <CardHeader>
                <CardTitle>{move || title.get()}</CardTitle>
                <CardDescription>"The site's palette. Any CSS color works."</CardDescription>
            </CardHeader>
            <CardContent>
                <div class="flex flex-col gap-4">
                    <TextField
                        id="primary_color"
                        label="Primary color"
                        placeholder="#7c6f5a"
                        value=text_value(state, |c| &c.primary_color)
                        on_change=text_setter(state, |c, v| c.primary_color = v)
                    />
                    <TextField
                        id="accent_color"
                        label="Accent color"
                        placeholder="#c9a26b"
                        value=text_value(state, |c| &c.accent_color)
                        on_change=text_setter(state, |c, v| c.accent_color = v)
                    />
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn ImagesPanel() -> impl IntoView {
    let state = expect_context::<AdminContext>().0;
    let title = section_title(state, "images");
    let is_empty = move || state.config.with(|c| c.gallery_images.is_empty());
    let count = move || state.config.with(|c| c.gallery_images.len());

    view! {
        <Card>
            <CardHeader>
                <CardTitle>{move || title.get()}</CardTitle>
                <CardDescription>
                    {move || format!("{} image(s). Paste image URLs; uploads happen elsewhere.", count())}
                </CardDescription>
            </CardHeader>
            <CardContent>
                <Show
                    when=move || !is_empty()
                    fallback=move || view! {
                        <div class="flex flex-col items-start gap-3">
                            <p class="text-sm text-muted-foreground">"The gallery is empty."</p>
                            <Button on:click=move |_| state.add_gallery_image()>
                                <Plus class="size-4" />
                                "Add the first image"
                            </Button>
                        </div>
                    }
                >
                    <CardList>
                        <For
                            each=move || state.config.with(|c| c.gallery_images.clone())
                            key=|g| g.id.clone()
                            children=move |g: GalleryImage| {
                                let id_remove = g.id.clone();
                                let on_remove = move |_| {
                                    if let Some(i) = state.gallery_index(&id_remove) {
                                        state.remove_gallery_at(i);
                                    }
                                };

                                view! {
                                    <CardItem class="items-start rounded-md border px-4 py-3">
                                        <div class="flex flex-1 flex-col gap-3">
                                            <Input
                                                r#type="url"
                                                placeholder="https://…/photo.jpg"
                                                value=gallery_field(state, &g.id, |x| &x.url)
                                                on_change=gallery_setter(state, &g.id, |x, v| x.url = v)
                                            />
                                            <Input
                                                placeholder="Caption (optional)"
                                                value=gallery_field(state, &g.id, |x| &x.caption)
                                                on_change=gallery_setter(state, &g.id, |x, v| x.caption = v)
                                            />
                                        </div>
                                        <button
                                            class="rounded-md p-2 text-muted-foreground transition-colors hover:bg-accent hover:text-foreground hover:cursor-pointer"
                                            title="Remove image"
                                            on:click=on_remove
                                        >
                                            <X class="size-4" />
                                        </button>
                                    </CardItem>
                                }
                            }
                        />
                    </CardList>
                </Show>
            </CardContent>
            <CardFooter>
                <Show when=move || !is_empty() fallback=|| ().into_view()>
                    <Button
                        class="bg-transparent border border-input text-muted-foreground hover:bg-accent hover:text-accent-foreground"
                        on:click=move |_| state.add_gallery_image()
                    >
                        <Plus class="size-4" />
                        "Add image"
                    </Button>
                </Show>
            </CardFooter>
        </Card>
    }
}

#[component]
fn RegistryPanel() -> impl IntoView {
    let state = expect_context::<AdminContext>().0;
    let title = section_title(state, "registry");

    view! {
        <Card>
            <CardHeader>
                <CardTitle>{move || title.get()}</CardTitle>
                <CardDescription>"Where guests find the gift registry."</CardDescription>
            </CardHeader>
            <CardContent>
                <div class="flex flex-col gap-4">
                    <TextField
                        id="registry_url"
                        label="Registry URL"
                        r#type="url"
                        placeholder="https://…"
                        value=text_value(state, |c| &c.registry_url)
                        on_change=text_setter(state, |c, v| c.registry_url = v)
                    />
                    <TextareaField
                        id="registry_note"
                        label="Note to guests"
                        placeholder="Your presence is the present, but…"
                        value=text_value(state, |c| &c.registry_note)
                        on_change=text_setter(state, |c, v| c.registry_note = v)
                    />
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn MapPanel() -> impl IntoView {
    let state = expect_context::<AdminContext>().0;
    let title = section_title(state, "map");

    view! {
        <Card>
            <CardHeader>
                <CardTitle>{move || title.get()}</CardTitle>
                <CardDescription>"The embedded map under the venue details."</CardDescription>
            </CardHeader>
            <CardContent>
                <div class="flex flex-col gap-4">
                    <TextField
                        id="map_embed_url"
                        label="Map embed URL"
                        r#type="url"
                        placeholder="https://www.google.com/maps/embed?…"
                        value=text_value(state, |c| &c.map_embed_url)
                        on_change=text_setter(state, |c, v| c.map_embed_url = v)
                    />
                    <p class="text-xs text-muted-foreground">
                        "The street address itself lives under General Settings."
                    </p>
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn WeatherPanel() -> impl IntoView {
    let state = expect_context::<AdminContext>().0;
    let title = section_title(state, "weather");

    let units = Signal::derive(move || state.config.with(|c| c.weather.units));
    let set_units = move |u: TemperatureUnits| state.update_config(move |c| c.weather.units = u);

    let unit_button = move |u: TemperatureUnits, text: &'static str| {
        view! {
            <button
                class=move || {
                    let base = "rounded-md border px-3 py-1.5 text-sm transition-colors hover:cursor-pointer";
                    if units.get() == u {
                        format!("{base} border-primary bg-accent text-accent-foreground font-medium")
                    } else {
                        format!("{base} border-input text-muted-foreground hover:bg-accent/50")
                    }
                }
                on:click=move |_| set_units(u)
            >
                {text}
            </button>
        }
    };

    view! {
        <Card>
            <CardHeader>
                <CardTitle>{move || title.get()}</CardTitle>
                <CardDescription>
                    {move || {
                        format!(
                            "Forecast widget settings, shown in {}. The site fetches the forecast; nothing is fetched here.",
                            units.get()
                        )
                    }}
                </CardDescription>
            </CardHeader>
            <CardContent>
                <div class="flex flex-col gap-4">
                    <ToggleField
                        id="weather_enabled"
                        label="Show the weather widget"
                        checked=bool_value(state, |c| c.weather.enabled)
                        on_change=bool_setter(state, |c, v| c.weather.enabled = v)
                    />
                    <TextField
                        id="weather_location"
                        label="Forecast location"
                        placeholder="Portland, OR"
                        value=text_value(state, |c| &c.weather.location)
                        on_change=text_setter(state, |c, v| c.weather.location = v)
                    />
                    <TextField
                        id="weather_api_key"
                        label="Weather API key"
                        r#type="password"
                        value=text_value(state, |c| &c.weather.api_key)
                        on_change=text_setter(state, |c, v| c.weather.api_key = v)
                    />
                    <div class="flex flex-col gap-2">
                        <Label>"Units"</Label>
                        <div class="flex gap-2">
                            {unit_button(TemperatureUnits::Celsius, "°C")}
                            {unit_button(TemperatureUnits::Fahrenheit, "°F")}
                        </div>
                    </div>
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn FaqPanel() -> impl IntoView {
    let state = expect_context::<AdminContext>().0;
    let title = section_title(state, "faq");

    view! {
        <Card>
            <CardHeader>
                <CardTitle>{move || title.get()}</CardTitle>
                <CardDescription>"Introduction shown above the questions."</CardDescription>
            </CardHeader>
            <CardContent>
                <TextareaField
                    id="faq_intro"
                    label="FAQ introduction"
                    placeholder="Everything guests keep asking us…"
                    value=text_value(state, |c| &c.faq_intro)
                    on_change=text_setter(state, |c, v| c.faq_intro = v)
                />
            </CardContent>
        </Card>
    }
}

#[component]
fn GuestbookPanel() -> impl IntoView {
    let state = expect_context::<AdminContext>().0;
    let title = section_title(state, "guestbook");

    view! {
        <Card>
            <CardHeader>
                <CardTitle>{move || title.get()}</CardTitle>
                <CardDescription>"Let guests leave a message on the site."</CardDescription>
            </CardHeader>
            <CardContent>
                <div class="flex flex-col gap-4">
                    <ToggleField
                        id="guestbook_enabled"
                        label="Enable the guestbook"
                        checked=bool_value(state, |c| c.guestbook_enabled)
                        on_change=bool_setter(state, |c, v| c.guestbook_enabled = v)
                    />
                    <TextField
                        id="guestbook_prompt"
                        label="Prompt"
                        placeholder="Leave us a note!"
                        value=text_value(state, |c| &c.guestbook_prompt)
                        on_change=text_setter(state, |c, v| c.guestbook_prompt = v)
                    />
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn VideosPanel() -> impl IntoView {
    let state = expect_context::<AdminContext>().0;
    let title = section_title(state, "videos");
    let is_empty = move || state.config.with(|c| c.videos.is_empty());

    view! {
        <Card>
            <CardHeader>
                <CardTitle>{move || title.get()}</CardTitle>
                <CardDescription>"Embedded videos. Deleting asks twice."</CardDescription>
            </CardHeader>
            <CardContent>
                <Show
                    when=move || !is_empty()
                    fallback=move || view! {
                        <div class="flex flex-col items-start gap-3">
                            <p class="text-sm text-muted-foreground">"No videos yet."</p>
                            <Button on:click=move |_| state.add_video()>
                                <Plus class="size-4" />
                                "Add the first video"
                            </Button>
                        </div>
                    }
                >
                    <CardList>
                        <For
                            each=move || state.config.with(|c| c.videos.clone())
                            key=|v| v.id.clone()
                            children=move |v: Video| {
                                let armed = {
                                    let id = v.id.clone();
                                    Signal::derive(move || state.video_delete_armed(&id))
                                };
                                let id_remove = v.id.clone();

                                view! {
                                    <CardItem class="items-start rounded-md border px-4 py-3">
                                        <div class="flex flex-1 flex-col gap-3">
                                            <Input
                                                placeholder="First dance"
                                                value=video_field(state, &v.id, |x| &x.title)
                                                on_change={
                                                    let id = v.id.clone();
                                                    Callback::new(move |val: String| {
                                                        state.update_video(&id, |x| x.title = val)
                                                    })
                                                }
                                            />
                                            <Input
                                                r#type="url"
                                                placeholder="https://youtu.be/…"
                                                value=video_field(state, &v.id, |x| &x.url)
                                                on_change={
                                                    let id = v.id.clone();
                                                    Callback::new(move |val: String| {
                                                        state.update_video(&id, |x| x.url = val)
                                                    })
                                                }
                                            />
                                        </div>
                                        // Two clicks to delete: the first arms, the second
                                        // removes. Any other interaction disarms.
                                        <button
                                            class=move || {
                                                let base = "rounded-md px-3 py-1.5 text-sm transition-colors hover:cursor-pointer";
                                                if armed.get() {
                                                    format!("{base} bg-destructive text-white hover:bg-destructive/90")
                                                } else {
                                                    format!("{base} border border-input text-muted-foreground hover:bg-accent hover:text-foreground")
                                                }
                                            }
                                            on:click=move |_| {
                                                state.remove_video(&id_remove);
                                            }
                                        >
                                            {move || if armed.get() { "Really delete?" } else { "Delete" }}
                                        </button>
                                    </CardItem>
                                }
                            }
                        />
                    </CardList>
                </Show>
            </CardContent>
            <CardFooter>
                <Show when=move || !is_empty() fallback=|| ().into_view()>
                    <Button
                        class="bg-transparent border border-input text-muted-foreground hover:bg-accent hover:text-accent-foreground"
                        on:click=move |_| state.add_video()
                    >
                        <Plus class="size-4" />
                        "Add video"
                    </Button>
                </Show>
            </CardFooter>
        </Card>
    }
}

#[component]
fn SystemsPanel() -> impl IntoView {
    let state = expect_context::<AdminContext>().0;

    let json = Memo::new(move |_| {
        state
            .config
            .with(|c| serde_json::to_string_pretty(c).unwrap_or_default())
    });
    let reset_armed = Signal::derive(move || state.reset_armed());

    view! {
        <div class="flex flex-col gap-4">
            <Card>
                <CardHeader>
                    <CardTitle>"Document"</CardTitle>
                    <CardDescription>
                        "The full site configuration, exactly as it is saved in this browser."
                    </CardDescription>
                </CardHeader>
                <CardContent>
                    <pre class="max-h-96 overflow-auto rounded-md border bg-muted p-4 text-xs">
                        {move || json.get()}
                    </pre>
                </CardContent>
            </Card>

            <Card>
                <CardHeader>
                    <CardTitle>"Danger zone"</CardTitle>
                </CardHeader>
                <CardContent>
                    <Alert class="border-destructive/30">
                        <AlertDescription>
                            "Resetting replaces everything above with a fresh starter document. It cannot be undone."
                        </AlertDescription>
                    </Alert>
                </CardContent>
                <CardFooter>
                    // Same two-step gate as video deletion.
                    <button
                        class=move || {
                            let base = "rounded-md px-4 py-2 text-sm font-medium transition-colors hover:cursor-pointer";
                            if reset_armed.get() {
                                format!("{base} bg-destructive text-white hover:bg-destructive/90")
                            } else {
                                format!("{base} border border-input text-muted-foreground hover:bg-accent hover:text-foreground")
                            }
                        }
                        on:click=move |_| {
                            state.reset_config();
                        }
                    >
                        {move || {
                            if reset_armed.get() { "Click again to reset everything" } else { "Reset document" }
                        }}
                    </button>
                </CardFooter>
            </Card>
        </div>
    }
}
