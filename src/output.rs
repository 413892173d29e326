// Copyright (c) 2026 MCU-Debug Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde_json::Value;
use std::io::{self, Write};

/// Write a JSON value for the extension host. Framed output carries a
/// `Content-Length` header like the debug adapter messages; unframed output is one line.
pub fn write_json<W: Write>(w: &mut W, msg: &Value, framed: bool) -> io::Result<()> {
    let body = serde_json::to_vec(msg)?;
    if framed {
        write!(w, "Content-Length: {}\r\n\r\n", body.len())?;
        w.write_all(&body)?;
    } else {
        w.write_all(&body)?;
        w.write_all(b"\n")?;
    }
    w.flush()
}

/// Same as `write_json`, holding the stdout lock for the whole message.
pub fn write_json_stdout(msg: &Value, framed: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut w = stdout.lock();
    write_json(&mut w, msg, framed)
}
