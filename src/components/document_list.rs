//! Document List Component
//!
//! Upload, view, download and delete the selected practice's documents.

use js_sys::{Array, Uint8Array};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, HtmlAnchorElement, HtmlInputElement, Url};

use crate::components::{render_list, DeleteConfirmButton, Modal};
use crate::context::use_app_context;
use crate::controllers::use_resource_list;
use crate::models::{Document, Entity};
use crate::store::{selected_practice_signal, use_selection, SelectionStateStoreFields};

async fn read_file(file: &File) -> Result<Vec<u8>, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

/// Hand `bytes` to the browser as a download named `file_name`
fn save_bytes(file_name: &str, bytes: &[u8]) -> Result<(), JsValue> {
    let parts = Array::of1(&Uint8Array::from(bytes));
    let blob = Blob::new_with_u8_array_sequence(&parts)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url)
}

#[component]
pub fn DocumentList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_selection();
    let documents = use_resource_list::<Document>(selected_practice_signal(store));
    let (uploading, set_uploading) = signal(false);
    let viewing = RwSignal::new(None::<Document>);

    let on_file = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else { return };
        let Some(file) = input.files().and_then(|files| files.get(0)) else { return };
        input.set_value("");
        let Some(practice_id) = store.selected_practice_id().get_untracked() else { return };

        set_uploading.set(true);
        spawn_local(async move {
            let file_name = file.name();
            let bytes = match read_file(&file).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    log::error!("[DocumentList] reading {} failed: {:?}", file_name, e);
                    ctx.notifier.error("Failed to upload document");
                    set_uploading.try_set(false);
                    return;
                }
            };
            match ctx.api().upload_document(&practice_id, &file_name, bytes).await {
                Ok(id) => {
                    log::info!("[DocumentList] uploaded {} as {}", file_name, id);
                    ctx.notifier.success("Document uploaded successfully");
                    documents.reload();
                }
                Err(e) => {
                    log::error!("[DocumentList] upload {} failed: {}", file_name, e);
                    ctx.notifier.error("Failed to upload document");
                }
            }
            set_uploading.try_set(false);
        });
    };

    let download = move |document: Document| {
        spawn_local(async move {
            let saved = match ctx.api().fetch_document(&document.id).await {
                Ok(bytes) => save_bytes(&document.file_name, &bytes).map_err(|e| format!("{:?}", e)),
                Err(e) => Err(e.to_string()),
            };
            if let Err(e) = saved {
                log::error!("[DocumentList] download {} failed: {}", document.id, e);
                ctx.notifier.error("Failed to download document");
            }
        });
    };

    view! {
        <div class="document-list">
            <div class="page-header">
                <label class="btn btn-primary upload-btn">
                    {move || if uploading.get() { "Uploading..." } else { "Upload Document" }}
                    <input type="file" class="hidden-input" disabled=move || uploading.get() on:change=on_file />
                </label>
            </div>

            {move || render_list(documents.state(), "No documents available", move |rows| {
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"File Name"</th>
                                <th class="actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows.into_iter().map(|document| {
                                let id = document.id.clone();
                                let file_name = document.file_name.clone();
                                let to_view = document.clone();
                                view! {
                                    <tr>
                                        <td>{file_name}</td>
                                        <td class="actions">
                                            <button class="btn btn-small" on:click=move |_| viewing.set(Some(to_view.clone()))>
                                                "View"
                                            </button>
                                            <button class="btn btn-small" on:click=move |_| download(document.clone())>
                                                "Download"
                                            </button>
                                            <DeleteConfirmButton
                                                noun={Document::NOUN}
                                                on_confirm=move |_| documents.remove(id.clone())
                                            />
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }
            })}

            {move || viewing.get().map(|document| {
                let src = ctx.api().document_url(&document.id);
                view! {
                    <Modal title=document.file_name.clone() class="document-viewer" on_close=move |_| viewing.set(None)>
                        <iframe class="document-frame" src=src title=document.file_name></iframe>
                    </Modal>
                }
            })}
        </div>
    }
}
