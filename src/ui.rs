use crate::models::SessionView;

pub fn render_index(session: &SessionView) -> String {
    let initial = serde_json::to_string(session)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/");
    INDEX_HTML
        .replace("{{STYLE}}", SHARED_STYLE)
        .replace("{{DAY}}", session.selected_day.name())
        .replace("{{SESSION}}", &initial)
}

pub fn render_status() -> String {
    STATUS_HTML.replace("{{STYLE}}", SHARED_STYLE)
}

const SHARED_STYLE: &str = r#"
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --ok: #2d7a4b;
      --bad: #c63b2b;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    a.nav-link {
      color: var(--accent-2);
      font-weight: 600;
      text-decoration: none;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 0.95rem;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
    }

    button:disabled {
      opacity: 0.55;
      cursor: progress;
    }

    .primary {
      background: var(--accent);
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .row {
      display: grid;
      grid-template-columns: 1fr 2fr;
      gap: 12px;
      padding: 10px 0;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    .row.head {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    input, select {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
    }

    .message {
      border-radius: 16px;
      padding: 12px 16px;
    }

    .message p {
      margin: 4px 0;
    }

    .message.success {
      background: rgba(45, 122, 75, 0.1);
      color: var(--ok);
    }

    .message.error {
      background: rgba(198, 59, 43, 0.1);
      color: var(--bad);
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Routine &amp; Attendance</title>
  <style>{{STYLE}}
    .days {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .day {
      background: rgba(47, 72, 88, 0.08);
      color: #6b645d;
    }

    .day.active {
      background: var(--accent-2);
      color: white;
    }

    .status-controls {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
    }

    .extra-form {
      display: flex;
      flex-wrap: wrap;
      align-items: end;
      gap: 12px;
    }

    .field {
      display: grid;
      gap: 6px;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Daily Routine &amp; Attendance</h1>
      <a class="nav-link" href="/status">View Status &rarr;</a>
    </header>

    <section class="card field">
      <label for="secret-word">Secret Word:</label>
      <input id="secret-word" type="password" placeholder="Enter secret word" autocomplete="off" />
    </section>

    <section class="days" id="days"></section>

    <section class="card">
      <h2 id="day-title">{{DAY}} Classes</h2>
      <div id="routine"></div>
    </section>

    <section>
      <button class="primary" id="submit-btn" type="button">Submit Attendance</button>
    </section>

    <section class="card">
      <h2>Extra Class</h2>
      <p class="subtitle">Record an extra class that happened on a particular day. This will automatically update attendance.</p>
      <div class="extra-form">
        <div class="field">
          <label for="extra-course">Course:</label>
          <select id="extra-course"></select>
        </div>
        <div class="field">
          <label for="extra-date">Date:</label>
          <input id="extra-date" type="date" />
        </div>
        <button id="extra-btn" type="button">Add Extra Class</button>
      </div>
    </section>

    <section id="message" class="message" hidden></section>
  </main>

  <script>
    let session = {{SESSION}};

    const daysEl = document.getElementById('days');
    const dayTitleEl = document.getElementById('day-title');
    const routineEl = document.getElementById('routine');
    const submitBtn = document.getElementById('submit-btn');
    const extraBtn = document.getElementById('extra-btn');
    const secretEl = document.getElementById('secret-word');
    const courseEl = document.getElementById('extra-course');
    const dateEl = document.getElementById('extra-date');
    const messageEl = document.getElementById('message');

    const STATUSES = [
      ['attended', 'Attended'],
      ['absent', 'Absent'],
      ['cancelled', 'Cancelled']
    ];

    const showMessage = (kind, text) => {
      messageEl.hidden = false;
      messageEl.className = `message ${kind === 'error' ? 'error' : 'success'}`;
      messageEl.replaceChildren(
        ...text.split('\n').map((line) => {
          const p = document.createElement('p');
          p.textContent = line;
          return p;
        })
      );
    };

    const renderDays = () => {
      daysEl.replaceChildren(
        ...session.days.map((day) => {
          const button = document.createElement('button');
          button.type = 'button';
          button.className = `day ${day === session.selected_day ? 'active' : ''}`;
          button.textContent = day;
          button.addEventListener('click', () => call('/api/day', { day }));
          return button;
        })
      );
    };

    const renderRoutine = () => {
      dayTitleEl.textContent = `${session.selected_day} Classes`;
      if (!session.classes.length) {
        routineEl.innerHTML = '<p class="subtitle">No classes scheduled for this day.</p>';
        return;
      }

      const head = document.createElement('div');
      head.className = 'row head';
      head.innerHTML = '<span>Class</span><span>Status</span>';

      const rows = session.classes.map((cls) => {
        const row = document.createElement('div');
        row.className = 'row';
        const label = document.createElement('span');
        label.textContent = cls.label;
        const controls = document.createElement('div');
        controls.className = 'status-controls';
        STATUSES.forEach(([value, text]) => {
          const option = document.createElement('label');
          const radio = document.createElement('input');
          radio.type = 'radio';
          radio.name = cls.id;
          radio.value = value;
          radio.checked = cls.status === value;
          radio.addEventListener('change', () =>
            call('/api/status', { class_id: cls.id, status: value })
          );
          option.append(radio, ` ${text}`);
          controls.append(option);
        });
        row.append(label, controls);
        return row;
      });

      routineEl.replaceChildren(head, ...rows);
    };

    const renderExtra = () => {
      const placeholder = new Option('Select a course', '');
      courseEl.replaceChildren(placeholder, ...session.courses.map((course) => new Option(course, course)));
      courseEl.value = session.extra.course_name;
      dateEl.value = session.extra.date;
    };

    const render = () => {
      renderDays();
      renderRoutine();
      renderExtra();
      submitBtn.disabled = session.is_submitting;
      submitBtn.textContent = session.is_submitting ? 'Submitting...' : 'Submit Attendance';
      extraBtn.disabled = session.is_submitting_extra;
      extraBtn.textContent = session.is_submitting_extra ? 'Adding...' : 'Add Extra Class';
      if (session.notice) {
        showMessage(session.notice.kind, session.notice.text);
      } else {
        messageEl.hidden = true;
      }
    };

    const call = async (path, body) => {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        const msg = await res.text();
        showMessage('error', msg || 'Request failed');
        return;
      }
      session = await res.json();
      render();
    };

    submitBtn.addEventListener('click', () => {
      submitBtn.disabled = true;
      submitBtn.textContent = 'Submitting...';
      messageEl.hidden = true;
      call('/api/submit', { secret: secretEl.value })
        .catch((err) => showMessage('error', err.message))
        .finally(() => {
          submitBtn.disabled = session.is_submitting;
          submitBtn.textContent = 'Submit Attendance';
        });
    });

    extraBtn.addEventListener('click', () => {
      extraBtn.disabled = true;
      extraBtn.textContent = 'Adding...';
      messageEl.hidden = true;
      call('/api/extra', {
        course_name: courseEl.value,
        date: dateEl.value,
        secret: secretEl.value
      })
        .catch((err) => showMessage('error', err.message))
        .finally(() => {
          extraBtn.disabled = session.is_submitting_extra;
          extraBtn.textContent = 'Add Extra Class';
        });
    });

    if (session) {
      render();
    } else {
      fetch('/api/session')
        .then((res) => res.json())
        .then((data) => {
          session = data;
          render();
        })
        .catch((err) => showMessage('error', err.message));
    }
  </script>
</body>
</html>
"#;

const STATUS_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Attendance Status</title>
  <style>{{STYLE}}
    .row {
      grid-template-columns: 2fr 1fr 1fr 1fr;
    }

    .row.low-attendance {
      background: rgba(198, 59, 43, 0.06);
    }

    .low-percentage {
      color: var(--bad);
      font-weight: 600;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Attendance Status</h1>
      <a class="nav-link" href="/">&larr; Back to Home</a>
    </header>
    <section id="content" class="card">
      <p class="subtitle">Loading attendance data...</p>
    </section>
  </main>

  <script>
    const contentEl = document.getElementById('content');

    const cell = (text, className) => {
      const span = document.createElement('span');
      span.textContent = text;
      if (className) {
        span.className = className;
      }
      return span;
    };

    const renderRows = (rows) => {
      if (!rows.length) {
        contentEl.innerHTML = '<p class="subtitle">No attendance data available.</p>';
        return;
      }
      const head = document.createElement('div');
      head.className = 'row head';
      head.innerHTML = '<span>Course</span><span>Attended</span><span>Total</span><span>Percentage</span>';
      const body = rows.map((row) => {
        const el = document.createElement('div');
        el.className = `row ${row.low_attendance ? 'low-attendance' : ''}`;
        el.dataset.key = row.key;
        el.append(
          cell(row.course_name),
          cell(String(row.attended)),
          cell(String(row.total)),
          cell(`${row.percentage}%`, row.low_attendance ? 'low-percentage' : '')
        );
        return el;
      });
      contentEl.replaceChildren(head, ...body);
    };

    const renderError = (message) => {
      const box = document.createElement('div');
      box.className = 'message error';
      const text = document.createElement('p');
      text.textContent = `Error: ${message}`;
      const retry = document.createElement('button');
      retry.type = 'button';
      retry.textContent = 'Retry';
      retry.addEventListener('click', fetchAttendance);
      box.append(text, retry);
      contentEl.replaceChildren(box);
    };

    async function fetchAttendance() {
      contentEl.innerHTML = '<p class="subtitle">Loading attendance data...</p>';
      try {
        const res = await fetch('/api/attendance');
        if (!res.ok) {
          throw new Error((await res.text()) || 'Failed to fetch attendance data');
        }
        const data = await res.json();
        renderRows(data.rows);
      } catch (err) {
        renderError(err.message || 'Unknown error occurred');
      }
    }

    fetchAttendance();
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::HomeSession;
    use chrono::NaiveDate;

    #[test]
    fn index_embeds_session_and_day() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 23).unwrap();
        let html = render_index(&HomeSession::new(today).view());
        assert!(html.contains("Friday Classes"));
        assert!(html.contains("\"selected_day\":\"Friday\""));
        assert!(html.contains("fri-communication"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn status_page_has_retry_flow() {
        let html = render_status();
        assert!(html.contains("/api/attendance"));
        assert!(html.contains("Retry"));
        assert!(!html.contains("{{STYLE}}"));
    }
}
