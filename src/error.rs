// code_assist — A terminal code assistant with segmented Markdown rendering
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Required input missing")]
    ValidationFailed,
    #[error("External request failed")]
    RequestFailed,
    #[error("API key not configured")]
    ApiKeyMissing,
    #[error("Input file unreadable")]
    InputUnreadable,
}

impl AppError {
    pub const VALIDATION_FAILED_EXIT_CODE: i32 = 20;
    pub const REQUEST_FAILED_EXIT_CODE: i32 = 21;
    pub const API_KEY_MISSING_EXIT_CODE: i32 = 22;
    pub const INPUT_UNREADABLE_EXIT_CODE: i32 = 23;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ValidationFailed => Self::VALIDATION_FAILED_EXIT_CODE,
            Self::RequestFailed => Self::REQUEST_FAILED_EXIT_CODE,
            Self::ApiKeyMissing => Self::API_KEY_MISSING_EXIT_CODE,
            Self::InputUnreadable => Self::INPUT_UNREADABLE_EXIT_CODE,
        }
    }

    /// Message printed to stderr on exit. Validation and request failures
    /// have already been rendered, so theirs only point at the cause.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Nothing was sent. Fill in the required inputs and retry.",
            Self::RequestFailed => "The request did not complete.",
            Self::ApiKeyMissing => {
                "No API key configured. Set CODE_ASSIST_API_KEY in the environment, then retry."
            }
            Self::InputUnreadable => "Could not read an input file.",
        }
    }
}
