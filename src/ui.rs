pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Fitness Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg-1: #eef4f0;
      --bg-2: #cfe5d8;
      --ink: #23302a;
      --accent: #2f8f5b;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 20px 48px rgba(35, 48, 42, 0.14);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%),
        linear-gradient(140deg, var(--bg-1), #f3f8f2 70%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      justify-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header h1 { margin: 0; font-size: clamp(1.8rem, 4vw, 2.4rem); }
    header .subtitle { margin: 4px 0 0; color: #5d6a62; }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      border: none;
      background: transparent;
      border-radius: 999px;
      padding: 8px 16px;
      font-weight: 600;
      color: #66706a;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 6px 14px rgba(47, 72, 88, 0.14);
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
      gap: 14px;
    }

    .stat {
      background: white;
      border-radius: 16px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8b958f;
    }

    .stat .value {
      display: block;
      margin-top: 6px;
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    h2 { margin: 0 0 10px; font-size: 1.2rem; }

    .workout-card {
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 14px;
      padding: 14px 16px;
      margin-bottom: 10px;
    }

    .workout-card .head {
      display: flex;
      justify-content: space-between;
      align-items: baseline;
      gap: 10px;
    }

    .workout-card .head h4 { margin: 0; }
    .workout-card .date { color: #79837c; font-size: 0.9rem; }
    .workout-card .meta { margin-top: 6px; color: #5d6a62; font-size: 0.92rem; display: flex; gap: 16px; }
    .workout-card .notes { margin-top: 8px; font-size: 0.9rem; color: #4d5a52; }

    .workout-card .delete {
      border: none;
      background: rgba(198, 59, 43, 0.1);
      color: #c63b2b;
      border-radius: 8px;
      padding: 4px 10px;
      font-size: 0.8rem;
      cursor: pointer;
    }

    .empty { color: #79837c; font-style: italic; }

    button.primary {
      border: none;
      border-radius: 999px;
      background: var(--accent);
      color: white;
      font-weight: 600;
      padding: 12px 20px;
      cursor: pointer;
      width: fit-content;
    }

    form.workout-form {
      display: grid;
      gap: 10px;
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 16px;
      padding: 16px;
      margin: 12px 0;
    }

    form.workout-form.hidden { display: none; }

    form.workout-form label {
      display: grid;
      gap: 4px;
      font-size: 0.85rem;
      color: #5d6a62;
    }

    form.workout-form input, form.workout-form textarea {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 8px;
      padding: 8px 10px;
      font: inherit;
    }

    form.workout-form .row { display: flex; gap: 10px; flex-wrap: wrap; }
    form.workout-form .row label { flex: 1; min-width: 120px; }
    form.workout-form .buttons { display: flex; gap: 10px; }

    button.ghost {
      border: 1px solid rgba(47, 72, 88, 0.25);
      background: transparent;
      border-radius: 999px;
      padding: 12px 20px;
      font-weight: 600;
      color: var(--accent-2);
      cursor: pointer;
    }

    .chart-card {
      background: white;
      border-radius: 16px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    #chart { width: 100%; height: 280px; display: block; }
    #chart text { font-family: "Space Grotesk", "Trebuchet MS", sans-serif; }
    .line-workouts { fill: none; stroke: var(--accent); stroke-width: 3; }
    .line-calories { fill: none; stroke: #d98a2b; stroke-width: 3; }
    .chart-point { fill: white; stroke-width: 2; }
    .chart-grid { stroke: rgba(47, 72, 88, 0.12); }
    .chart-label { fill: #79837c; font-size: 11px; }

    .legend { display: flex; gap: 18px; margin-top: 8px; font-size: 0.85rem; color: #5d6a62; }
    .legend .dot { display: inline-block; width: 10px; height: 10px; border-radius: 50%; margin-right: 6px; }

    .tab-content { display: none; }
    .tab-content.active { display: block; }

    .status { font-size: 0.95rem; min-height: 1.2em; color: #66706a; }
    .status[data-type="error"] { color: #c63b2b; }
    .status[data-type="ok"] { color: #2d7a4b; }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Fitness Tracker</h1>
      <p class="subtitle">Log workouts, keep your streak alive, watch the weekly trend.</p>
    </header>

    <div class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="dashboard" role="tab" aria-selected="true">Dashboard</button>
      <button class="tab" type="button" data-tab="workouts" role="tab" aria-selected="false">Workouts</button>
      <button class="tab" type="button" data-tab="progress" role="tab" aria-selected="false">Progress</button>
    </div>

    <section id="dashboard" class="tab-content active">
      <div class="cards">
        <div class="stat">
          <span class="label">Total workouts</span>
          <span class="value" id="card-total">0</span>
        </div>
        <div class="stat">
          <span class="label">This week</span>
          <span class="value" id="card-week">0</span>
        </div>
        <div class="stat">
          <span class="label">Current streak</span>
          <span class="value" id="card-streak">0</span>
        </div>
        <div class="stat">
          <span class="label">Calories burned</span>
          <span class="value" id="card-calories">0</span>
        </div>
      </div>
      <h2 style="margin-top:20px">Recent workouts</h2>
      <div id="recent-list"></div>
    </section>

    <section id="workouts" class="tab-content">
      <button class="primary" id="add-workout-btn" type="button">Add workout</button>
      <form class="workout-form hidden" id="workout-form">
        <div class="row">
          <label>Date
            <input type="date" name="date" required />
          </label>
          <label>Name
            <input type="text" name="name" placeholder="Leg day" />
          </label>
        </div>
        <div class="row">
          <label>Duration (min)
            <input type="number" name="duration" min="0" />
          </label>
          <label>Calories
            <input type="number" name="calories" min="0" />
          </label>
        </div>
        <label>Notes
          <textarea name="notes" rows="2"></textarea>
        </label>
        <div class="buttons">
          <button class="primary" type="submit">Save</button>
          <button class="ghost" type="button" id="cancel-workout">Cancel</button>
        </div>
      </form>
      <div id="all-list"></div>
    </section>

    <section id="progress" class="tab-content">
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 640 280" aria-label="Weekly progress chart" role="img"></svg>
        <div class="legend">
          <span><span class="dot" style="background:#2f8f5b"></span>Workouts per week</span>
          <span><span class="dot" style="background:#d98a2b"></span>Calories per week</span>
        </div>
      </div>
      <div class="cards" style="margin-top:14px">
        <div class="stat">
          <span class="label">Avg workouts / week</span>
          <span class="value" id="stat-average">0</span>
        </div>
        <div class="stat">
          <span class="label">Most frequent exercise</span>
          <span class="value" id="stat-frequent">--</span>
        </div>
        <div class="stat">
          <span class="label">Total volume (kg)</span>
          <span class="value" id="stat-volume">0</span>
        </div>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let workouts = [];
    let dashboardData = null;
    let statsData = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (text) =>
      String(text).replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
      }[ch]));

    const fetchJson = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        let detail = 'Request failed';
        try {
          const body = await res.json();
          if (body && body.error) detail = body.error;
        } catch (ignored) {}
        throw new Error(detail);
      }
      return res.json();
    };

    const renderCards = () => {
      if (!dashboardData) return;
      document.getElementById('card-total').textContent = dashboardData.totalWorkouts;
      document.getElementById('card-week').textContent = dashboardData.workoutsThisWeek;
      document.getElementById('card-streak').textContent = dashboardData.currentStreak;
      document.getElementById('card-calories').textContent =
        dashboardData.totalCalories.toLocaleString();
    };

    const workoutCard = (workout, withDelete) => `
      <div class="workout-card" data-id="${workout.id}">
        <div class="head">
          <h4>${escapeHtml(workout.name || 'Workout')}</h4>
          <span class="date">${escapeHtml(workout.date)}</span>
        </div>
        <div class="meta">
          <span>${workout.duration || 0} min</span>
          <span>${workout.calories || 0} cal</span>
          <span>${(workout.exercises || []).length} exercises</span>
          ${withDelete ? '<button class="delete" type="button">Delete</button>' : ''}
        </div>
        ${workout.notes ? `<div class="notes">${escapeHtml(workout.notes)}</div>` : ''}
      </div>`;

    const byDateDesc = (a, b) => (a.date < b.date ? 1 : a.date > b.date ? -1 : 0);

    const renderRecent = () => {
      const container = document.getElementById('recent-list');
      if (!workouts.length) {
        container.innerHTML = '<p class="empty">No workouts yet. Log your first one!</p>';
        return;
      }
      container.innerHTML = [...workouts]
        .sort(byDateDesc)
        .slice(0, 5)
        .map((w) => workoutCard(w, false))
        .join('');
    };

    const renderAll = () => {
      const container = document.getElementById('all-list');
      if (!workouts.length) {
        container.innerHTML = '<p class="empty">No workouts yet. Click "Add workout" to start.</p>';
        return;
      }
      container.innerHTML = [...workouts]
        .sort(byDateDesc)
        .map((w) => workoutCard(w, true))
        .join('');
    };

    const renderStats = () => {
      if (!statsData) return;
      document.getElementById('stat-average').textContent = statsData.averageWorkoutsPerWeek;
      document.getElementById('stat-frequent').textContent = statsData.mostFrequentExercise
        ? `${statsData.mostFrequentExercise.name} (${statsData.mostFrequentExercise.count})`
        : '--';
      document.getElementById('stat-volume').textContent =
        Math.round(statsData.totalWeight).toLocaleString();
    };

    const renderWeeklyChart = () => {
      if (!dashboardData) return;
      const weekly = dashboardData.weekly;
      const labels = weekly.labels.map((label) => label.replace(/^\d{4}-/, ''));

      const width = 640;
      const height = 280;
      const paddingX = 48;
      const paddingY = 36;
      const top = 20;

      const scale = (values) => {
        const max = Math.max(1, ...values);
        return (value) => height - paddingY - (value / max) * (height - top - paddingY);
      };

      const yWorkouts = scale(weekly.workouts);
      const yCalories = scale(weekly.calories);
      const xStep = labels.length > 1 ? (width - paddingX * 2) / (labels.length - 1) : 0;
      const x = (index) => (labels.length > 1 ? paddingX + index * xStep : width / 2);

      const path = (values, toY) =>
        values
          .map((value, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(1)} ${toY(value).toFixed(1)}`)
          .join(' ');

      const dots = (values, toY, stroke) =>
        values
          .map((value, index) =>
            `<circle class="chart-point" stroke="${stroke}" cx="${x(index)}" cy="${toY(value)}" r="4" />`)
          .join('');

      const ticks = 4;
      let grid = '';
      const maxWorkouts = Math.max(1, ...weekly.workouts);
      const maxCalories = Math.max(1, ...weekly.calories);
      for (let i = 0; i <= ticks; i += 1) {
        const frac = i / ticks;
        const yPos = height - paddingY - frac * (height - top - paddingY);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 8}" y="${yPos + 4}" text-anchor="end">${Math.round(maxWorkouts * frac)}</text>`;
        grid += `<text class="chart-label" x="${width - paddingX + 8}" y="${yPos + 4}" text-anchor="start">${Math.round(maxCalories * frac)}</text>`;
      }

      const labelEvery = labels.length > 10 ? 2 : 1;
      const xLabels = labels
        .map((label, index) => {
          if (index % labelEvery !== 0) return '';
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${escapeHtml(label)}</text>`;
        })
        .join('');

      chartEl.innerHTML = `
        ${grid}
        <path class="line-workouts" d="${path(weekly.workouts, yWorkouts)}" />
        <path class="line-calories" d="${path(weekly.calories, yCalories)}" />
        ${dots(weekly.workouts, yWorkouts, '#2f8f5b')}
        ${dots(weekly.calories, yCalories, '#d98a2b')}
        ${xLabels}
      `;
    };

    const renderAllViews = () => {
      renderCards();
      renderRecent();
      renderAll();
      renderStats();
      renderWeeklyChart();
    };

    const refresh = async () => {
      const results = await Promise.allSettled([
        fetchJson('/api/workouts'),
        fetchJson('/api/dashboard'),
        fetchJson('/api/stats')
      ]);
      const [w, d, s] = results;
      workouts = w.status === 'fulfilled' ? w.value : [];
      dashboardData = d.status === 'fulfilled' ? d.value : dashboardData;
      statsData = s.status === 'fulfilled' ? s.value : statsData;
      const failed = results.find((r) => r.status === 'rejected');
      if (failed) setStatus(failed.reason.message, 'error');
      renderAllViews();
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        tabs.forEach((tab) => {
          const active = tab === button;
          tab.classList.toggle('active', active);
          tab.setAttribute('aria-selected', String(active));
        });
        document.querySelectorAll('.tab-content').forEach((section) => {
          section.classList.toggle('active', section.id === button.dataset.tab);
        });
      });
    });

    const form = document.getElementById('workout-form');
    const addBtn = document.getElementById('add-workout-btn');
    const cancelBtn = document.getElementById('cancel-workout');

    addBtn.addEventListener('click', () => {
      form.classList.remove('hidden');
      form.elements.date.value = new Date().toISOString().split('T')[0];
    });

    cancelBtn.addEventListener('click', () => form.classList.add('hidden'));

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      const payload = {
        date: form.elements.date.value,
        name: form.elements.name.value,
        duration: parseInt(form.elements.duration.value, 10) || 0,
        calories: parseInt(form.elements.calories.value, 10) || 0,
        notes: form.elements.notes.value,
        exercises: []
      };
      try {
        await fetchJson('/api/workouts', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(payload)
        });
        form.reset();
        form.classList.add('hidden');
        setStatus('Workout saved', 'ok');
        setTimeout(() => setStatus('', ''), 1500);
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('all-list').addEventListener('click', async (event) => {
      if (!event.target.matches('.delete')) return;
      const card = event.target.closest('.workout-card');
      try {
        await fetchJson(`/api/workouts/${card.dataset.id}`, { method: 'DELETE' });
        setStatus('Workout deleted', 'ok');
        setTimeout(() => setStatus('', ''), 1500);
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
