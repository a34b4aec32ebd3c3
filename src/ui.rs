use crate::pagination::{INITIAL_WINDOW, WINDOW_STEP};
use chrono::NaiveDate;

pub fn render_index(today: NaiveDate, notice_duration_ms: u64) -> String {
    INDEX_HTML
        .replace("{{TODAY}}", &today.format("%Y-%m-%d").to_string())
        .replace("{{NOTICE_MS}}", &notice_duration_ms.to_string())
        .replace("{{INITIAL_WINDOW}}", &INITIAL_WINDOW.to_string())
        .replace("{{WINDOW_STEP}}", &WINDOW_STEP.to_string())
}

pub const SERVICE_WORKER_JS: &str = r#"const CACHE_NAME = 'weight-tracker-cache-v2';
const urlsToCache = ['/', 'https://cdn.jsdelivr.net/npm/chart.js'];

self.addEventListener('install', (event) => {
  event.waitUntil(caches.open(CACHE_NAME).then((cache) => cache.addAll(urlsToCache)));
  self.skipWaiting();
});

self.addEventListener('fetch', (event) => {
  if (event.request.method !== 'GET' || new URL(event.request.url).pathname.startsWith('/api/')) {
    return;
  }
  if (event.request.mode === 'navigate') {
    event.respondWith(
      fetch(event.request)
        .then((resp) => {
          const copy = resp.clone();
          caches.open(CACHE_NAME).then((cache) => cache.put(event.request, copy));
          return resp;
        })
        .catch(() => caches.match(event.request))
    );
    return;
  }
  event.respondWith(caches.match(event.request).then((resp) => resp || fetch(event.request)));
});
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Weight Tracker</title>
  <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
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

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    form {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 12px;
    }

    input {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 12px;
      font: inherit;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    #recordList {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    #recordList li {
      background: white;
      border-radius: 14px;
      padding: 12px 16px;
      display: flex;
      justify-content: space-between;
      align-items: center;
      border-left: 6px solid #c9c2b8;
    }

    #recordList li.increase { border-left-color: #c63b2b; }
    #recordList li.decrease { border-left-color: #2d7a4b; }
    #recordList li button { background: var(--accent-2); padding: 8px 14px; }

    #loadMoreBtn { display: none; background: var(--accent-2); }

    #message {
      position: fixed;
      top: 18px;
      left: 50%;
      transform: translate(-50%, -140%);
      padding: 14px 22px;
      border-radius: 999px;
      color: white;
      transition: transform 300ms ease;
    }

    #message.show { transform: translate(-50%, 0); }
    .message-info { background: var(--accent-2); }
    .message-celebration { background: var(--accent); }
    .message-encourage { background: #2d7a4b; }
  </style>
</head>
<body>
  <div id="message"></div>
  <main class="app">
    <h1>Weight Tracker</h1>

    <form id="recordForm">
      <input id="dateInput" type="date" value="{{TODAY}}" required />
      <input id="weightInput" type="number" step="0.1" placeholder="Weight (kg)" />
      <input id="mealInput" type="text" placeholder="Meals" />
      <button type="submit">Record</button>
    </form>

    <section class="panel">
      <div class="stat">
        <span class="label">Total loss</span>
        <span id="totalLoss" class="value">-</span>
      </div>
      <div class="stat">
        <span class="label">Goal achievement</span>
        <span id="achievement" class="value">-</span>
      </div>
      <div class="stat">
        <span class="label">Goal (kg)</span>
        <input id="goalInput" type="number" step="0.1" />
      </div>
    </section>

    <canvas id="weightChart"></canvas>

    <ul id="recordList"></ul>
    <button id="loadMoreBtn" type="button">Show more</button>
  </main>

  <script>
    const NOTICE_MS = {{NOTICE_MS}};
    const WINDOW_STEP = {{WINDOW_STEP}};
    let visibleCount = {{INITIAL_WINDOW}};
    let chart;
    let hideTimer;

    const messageDiv = document.getElementById('message');
    const dateInput = document.getElementById('dateInput');
    const goalInput = document.getElementById('goalInput');

    const api = async (path, options = {}) => {
      const resp = await fetch(path, {
        headers: { 'Content-Type': 'application/json' },
        ...options,
      });
      if (!resp.ok) throw new Error(await resp.text());
      return resp.json();
    };

    const showMessage = (notice) => {
      if (!notice) return;
      messageDiv.textContent = notice.message;
      messageDiv.className = `message-${notice.tier}`;
      void messageDiv.offsetWidth;
      messageDiv.classList.add('show');
      clearTimeout(hideTimer);
      hideTimer = setTimeout(() => messageDiv.classList.remove('show'), NOTICE_MS);
    };

    const renderRecords = async () => {
      const page = await api(`/api/records?window=${visibleCount}`);
      const list = document.getElementById('recordList');
      list.innerHTML = '';
      page.items.forEach((item) => {
        const li = document.createElement('li');
        li.className = item.trend || '';
        const text = document.createElement('div');
        const strong = document.createElement('strong');
        strong.textContent = `${item.weight}kg ${item.arrow}`;
        const small = document.createElement('small');
        small.textContent = item.date;
        const meal = document.createElement('div');
        meal.textContent = `Meals: ${item.meal}`;
        text.append(strong, document.createElement('br'), small, meal);

        const delBtn = document.createElement('button');
        delBtn.textContent = 'Delete';
        delBtn.onclick = async () => {
          await api('/api/records/delete', {
            method: 'POST',
            body: JSON.stringify({ date: item.date, weight: item.weight }),
          });
          await refresh();
        };

        li.append(text, delBtn);
        list.appendChild(li);
      });
      document.getElementById('loadMoreBtn').style.display = page.has_more ? 'block' : 'none';
    };

    const updateChart = async () => {
      const series = await api('/api/chart');
      if (chart) chart.destroy();
      if (typeof Chart === 'undefined') return;
      chart = new Chart(document.getElementById('weightChart').getContext('2d'), {
        type: 'line',
        data: {
          labels: series.labels,
          datasets: [
            { label: 'Weight (kg)', data: series.weights, borderColor: '#ff6b4a', fill: false },
            { label: 'Goal (kg)', data: series.goal, borderColor: '#2f4858', borderDash: [6, 6], pointRadius: 0, fill: false },
          ],
        },
        options: { responsive: true },
      });
    };

    const updateStats = async () => {
      const body = await api('/api/stats');
      if (!body.stats) return;
      document.getElementById('totalLoss').textContent = body.stats.total_loss_display;
      document.getElementById('achievement').textContent = body.stats.achievement_display;
      showMessage(body.notice);
    };

    const prefillToday = async () => {
      const today = await api('/api/today');
      dateInput.value = today.date;
    };

    const refresh = async () => {
      await renderRecords();
      await updateChart();
      await updateStats();
    };

    document.getElementById('recordForm').addEventListener('submit', async (event) => {
      event.preventDefault();
      const weight = parseFloat(document.getElementById('weightInput').value);
      const body = await api('/api/records', {
        method: 'POST',
        body: JSON.stringify({
          date: dateInput.value,
          weight: Number.isFinite(weight) ? weight : null,
          meal: document.getElementById('mealInput').value,
        }),
      });
      if (!body.notice) return;
      showMessage(body.notice);
      event.target.reset();
      await prefillToday();
      await refresh();
    });

    goalInput.addEventListener('change', async () => {
      const value = parseFloat(goalInput.value);
      const body = await api('/api/goal', {
        method: 'PUT',
        body: JSON.stringify({ goal: Number.isFinite(value) ? value : null }),
      });
      goalInput.value = body.goal;
      if (body.updated) await refresh();
    });

    document.getElementById('loadMoreBtn').addEventListener('click', async () => {
      visibleCount += WINDOW_STEP;
      await renderRecords();
    });

    if ('serviceWorker' in navigator) {
      navigator.serviceWorker.register('/service-worker.js').catch(() => {});
    }

    prefillToday().catch((err) => console.error(err));
    api('/api/goal').then((body) => { goalInput.value = body.goal; });
    refresh().catch((err) => console.error(err));
  </script>
</body>
</html>
"#;
