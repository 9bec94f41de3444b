use crate::{
    api::AttendanceRecord,
    pages::attendance::utils::{duration_cell, record_kind_label, NO_ATTENDANCE_RECORDS},
    utils::time::format_timestamp,
};
use leptos::*;

const COLUMNS: [&str; 3] = ["Date & Time", "Type", "Duration"];

#[component]
pub fn HistoryTable(records: Vec<AttendanceRecord>) -> impl IntoView {
    let body = if records.is_empty() {
        view! {
            <tr>
                <td colspan=COLUMNS.len() class="px-6 py-4 text-center text-sm text-gray-500">
                    {NO_ATTENDANCE_RECORDS}
                </td>
            </tr>
        }
        .into_view()
    } else {
        records
            .into_iter()
            .map(|record| view! { <HistoryRow record=record /> })
            .collect_view()
    };

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        {COLUMNS
                            .iter()
                            .map(|&heading| {
                                view! {
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                        {heading}
                                    </th>
                                }
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">{body}</tbody>
            </table>
        </div>
    }
}

#[component]
fn HistoryRow(record: AttendanceRecord) -> impl IntoView {
    let badge = if record.is_open() {
        "bg-green-100 text-green-800"
    } else {
        "bg-gray-100 text-gray-800"
    };

    view! {
        <tr data-record-id=record.id.clone()>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                {format_timestamp(&record.check_in)}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm">
                <span class=format!("px-2 inline-flex text-xs leading-5 font-semibold rounded-full {badge}")>
                    {record_kind_label(&record)}
                </span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                {duration_cell(&record)}
            </td>
        </tr>
    }
}
